//! Shared terminal utilities.
//!
//! Box drawing, ANSI helpers, the strength meter, and raw mode management.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;

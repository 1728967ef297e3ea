//! Password construction and strength rating.

pub mod classes;
mod generate;
pub mod output;
pub mod strength;

pub use generate::{Generated, Request, generate};

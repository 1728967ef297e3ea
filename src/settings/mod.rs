//! Password builder settings.

mod file;

use crate::pass::Request;
use crate::pass::classes::{CharacterClass, ClassSet, DEFAULT_SYMBOLS};

/// Upper bound the length input enforces. Matches the selection range the
/// tool presents (0..=100).
pub const MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub use_uppercase: bool,
    pub use_lowercase: bool,
    pub use_digits: bool,
    pub use_symbols: bool,
    pub symbol_chars: Vec<u8>,
    pub show_strength: bool,
    pub output_file_path: String,
    pub output_to_terminal: bool,
    pub cli_command: String,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }

    pub fn has_saved_command() -> bool {
        Self::load_from_file()
            .map(|s| !s.cli_command.is_empty())
            .unwrap_or(false)
    }

    /// The enabled classes as a set.
    pub fn classes(&self) -> ClassSet {
        let mut set = ClassSet::none();
        set.set(CharacterClass::Uppercase, self.use_uppercase);
        set.set(CharacterClass::Lowercase, self.use_lowercase);
        set.set(CharacterClass::Digit, self.use_digits);
        set.set(CharacterClass::Symbol, self.use_symbols);
        set
    }

    /// Write a class set back into the toggle fields. Used after generation
    /// so the visible selection reflects any substitution that fired.
    pub fn set_classes(&mut self, set: ClassSet) {
        self.use_uppercase = set.contains(CharacterClass::Uppercase);
        self.use_lowercase = set.contains(CharacterClass::Lowercase);
        self.use_digits = set.contains(CharacterClass::Digit);
        self.use_symbols = set.contains(CharacterClass::Symbol);
    }

    pub fn request(&self) -> Request<'_> {
        Request {
            length: self.pass_length,
            classes: self.classes(),
            symbols: &self.symbol_chars,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Self {
            pass_length: 9,
            number_of_passwords: 1,
            use_uppercase: false,
            use_lowercase: false,
            use_digits: false,
            use_symbols: false,
            symbol_chars: DEFAULT_SYMBOLS.to_vec(),
            show_strength: true,
            output_file_path: String::new(),
            output_to_terminal: true,
            cli_command: String::new(),
        };
        settings.set_classes(ClassSet::all());
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_ui_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.pass_length, 9);
        assert_eq!(settings.number_of_passwords, 1);
        assert_eq!(settings.classes(), ClassSet::all());
        assert_eq!(settings.symbol_chars, DEFAULT_SYMBOLS);
    }

    #[test]
    fn class_round_trip_through_toggles() {
        let mut settings = Settings::default();
        let set = ClassSet::none()
            .with(CharacterClass::Lowercase)
            .with(CharacterClass::Digit);
        settings.set_classes(set);
        assert_eq!(settings.classes(), set);
        assert!(!settings.use_uppercase);
        assert!(settings.use_digits);
    }

    #[test]
    fn request_reflects_settings() {
        let mut settings = Settings::default();
        settings.pass_length = 24;
        settings.use_symbols = false;
        let request = settings.request();
        assert_eq!(request.length, 24);
        assert!(!request.classes.contains(CharacterClass::Symbol));
        assert_eq!(request.symbols, DEFAULT_SYMBOLS);
    }
}

//! Character classes and their alphabets.

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";

/// Default symbol alphabet. Editable in settings or via `--symbols`.
pub const DEFAULT_SYMBOLS: &[u8] = b"!@#$%^&*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Canonical order. Also the guarantee priority: when the requested
    /// length is shorter than the number of enabled classes, classes later
    /// in this list lose their guaranteed character first.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The class alphabet. Symbols come from the caller's configured list.
    pub fn alphabet(self, symbols: &[u8]) -> &[u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => symbols,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "digits",
            CharacterClass::Symbol => "symbols",
        }
    }
}

/// Which character classes are enabled for a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSet {
    uppercase: bool,
    lowercase: bool,
    digits: bool,
    symbols: bool,
}

impl ClassSet {
    pub const fn none() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
        }
    }

    pub const fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }

    pub fn contains(self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Digit => self.digits,
            CharacterClass::Symbol => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        match class {
            CharacterClass::Uppercase => self.uppercase = enabled,
            CharacterClass::Lowercase => self.lowercase = enabled,
            CharacterClass::Digit => self.digits = enabled,
            CharacterClass::Symbol => self.symbols = enabled,
        }
    }

    pub fn with(mut self, class: CharacterClass) -> Self {
        self.set(class, true);
        self
    }

    pub fn count(self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(self) -> bool {
        !self.uppercase && !self.lowercase && !self.digits && !self.symbols
    }

    /// Enabled classes in canonical order.
    pub fn iter(self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(move |&class| self.contains(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_have_expected_sizes() {
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert!(!DEFAULT_SYMBOLS.is_empty());
    }

    #[test]
    fn iteration_follows_canonical_order() {
        let classes: Vec<_> = ClassSet::all().iter().collect();
        assert_eq!(
            classes,
            vec![
                CharacterClass::Uppercase,
                CharacterClass::Lowercase,
                CharacterClass::Digit,
                CharacterClass::Symbol,
            ]
        );
    }

    #[test]
    fn set_and_contains_round_trip() {
        let mut set = ClassSet::none();
        assert!(set.is_empty());
        assert_eq!(set.count(), 0);

        set.set(CharacterClass::Digit, true);
        assert!(set.contains(CharacterClass::Digit));
        assert!(!set.contains(CharacterClass::Uppercase));
        assert_eq!(set.count(), 1);

        set.set(CharacterClass::Digit, false);
        assert!(set.is_empty());
    }
}

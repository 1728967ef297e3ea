//! Password strength rating.
//!
//! A coarse length/diversity policy: count the distinct character classes
//! present, then walk a decision table top to bottom. Raw scores 3 and 4
//! share the Strong tier; the table is kept as-is rather than inventing a
//! fifth level.

/// Display label for a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    TooWeak,
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::TooWeak => "TOO WEAK",
            StrengthLabel::Weak => "WEAK",
            StrengthLabel::Medium => "MEDIUM",
            StrengthLabel::Strong => "STRONG",
        }
    }
}

/// A label plus the 1..=4 tier driving the meter display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthRating {
    pub label: StrengthLabel,
    pub level: u8,
}

/// Rate a password.
pub fn score(password: &str) -> StrengthRating {
    let (label, level) = match score_raw(password) {
        0 => (StrengthLabel::TooWeak, 1),
        1 => (StrengthLabel::Weak, 2),
        2 => (StrengthLabel::Medium, 3),
        // 3 and 4 collapse to the same tier.
        _ => (StrengthLabel::Strong, 4),
    };
    StrengthRating { label, level }
}

/// The decision table. First match wins.
fn score_raw(password: &str) -> u8 {
    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;
    let mut has_symbol = false;
    let mut length = 0usize;

    for c in password.chars() {
        length += 1;
        if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else {
            // Anything outside the three letter/digit classes counts as a
            // symbol, so pasted passwords rate the same as generated ones.
            has_symbol = true;
        }
    }

    let types = [has_upper, has_lower, has_digit, has_symbol]
        .iter()
        .filter(|&&present| present)
        .count();

    if length < 6 {
        0
    } else if length < 8 && types < 2 {
        1
    } else if length < 10 && types < 3 {
        2
    } else if length < 12 && types < 4 {
        3
    } else if length >= 12 && types >= 3 {
        4
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(password: &str) -> (StrengthLabel, u8) {
        let rating = score(password);
        (rating.label, rating.level)
    }

    #[test]
    fn short_passwords_are_too_weak() {
        assert_eq!(rate(""), (StrengthLabel::TooWeak, 1));
        assert_eq!(rate("aB3!x"), (StrengthLabel::TooWeak, 1));
    }

    #[test]
    fn short_single_class_is_weak() {
        assert_eq!(rate("abcdef"), (StrengthLabel::Weak, 2));
        assert_eq!(rate("1234567"), (StrengthLabel::Weak, 2));
    }

    #[test]
    fn mid_length_low_diversity_is_medium() {
        assert_eq!(rate("abcdef12"), (StrengthLabel::Medium, 3));
        assert_eq!(rate("abcdefghi"), (StrengthLabel::Medium, 3));
    }

    #[test]
    fn eight_chars_all_classes_is_medium() {
        // High diversity but length under 10 lands in the fallback row.
        assert_eq!(rate("Ab3!xy9Q"), (StrengthLabel::Medium, 3));
    }

    #[test]
    fn twelve_chars_two_classes_is_medium() {
        // Length 12 needs three classes for the Strong row.
        assert_eq!(rate("Abcdefghijkl"), (StrengthLabel::Medium, 3));
    }

    #[test]
    fn eleven_chars_three_classes_is_strong() {
        assert_eq!(rate("Abcdefgh123"), (StrengthLabel::Strong, 4));
    }

    #[test]
    fn long_diverse_password_is_strong() {
        assert_eq!(rate("Abcdef123456!!"), (StrengthLabel::Strong, 4));
    }

    #[test]
    fn non_ascii_counts_toward_symbols() {
        // Length 12, classes: lower + symbol + digit.
        assert_eq!(rate("abcdéfgh1234"), (StrengthLabel::Strong, 4));
    }
}

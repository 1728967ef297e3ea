//! Password assembly.
//!
//! Each enabled class contributes its full alphabet to a combined pool and
//! one guaranteed character, so every selected class shows up whenever the
//! requested length allows it. The finished sequence is shuffled with a
//! uniform permutation so the guaranteed characters are not front-loaded.
//!
//! Randomness comes from whatever `rand::Rng` the caller hands in. This is
//! a usability tool, not a vetted security primitive.

use rand::Rng;
use rand::seq::SliceRandom;

use super::classes::{CharacterClass, ClassSet};

/// A single generation request.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    pub length: usize,
    pub classes: ClassSet,
    /// Alphabet for the Symbol class. ASCII-graphic bytes only.
    pub symbols: &'a [u8],
}

/// A generated password plus the classes that were actually used.
///
/// `classes` differs from the request when the empty-selection fallback
/// fired (lowercase substituted) or when the Symbol class was enabled with
/// an empty symbol list (class dropped). Callers driving a selection UI
/// should write this back so the visible state matches what was generated.
#[derive(Debug)]
pub struct Generated {
    pub password: String,
    pub classes: ClassSet,
}

/// Build one password from the request.
pub fn generate<R: Rng>(request: &Request, rng: &mut R) -> Generated {
    let mut effective = request.classes;

    // An empty alphabet contributes nothing to the pool.
    if effective.contains(CharacterClass::Symbol) && request.symbols.is_empty() {
        effective.set(CharacterClass::Symbol, false);
    }
    if effective.is_empty() {
        effective = effective.with(CharacterClass::Lowercase);
    }

    let mut pool: Vec<u8> = Vec::new();
    let mut chars: Vec<u8> = Vec::with_capacity(request.length.max(effective.count()));

    // Guaranteed character per enabled class, in canonical order.
    for class in effective.iter() {
        let alphabet = class.alphabet(request.symbols);
        pool.extend_from_slice(alphabet);
        chars.push(alphabet[rng.gen_range(0..alphabet.len())]);
    }

    if chars.len() > request.length {
        // Length shorter than the class count: keep `length` guarantees and
        // drop the rest, lowest-priority classes first. Lossy edge case.
        chars.truncate(request.length);
    } else {
        // Fill the remainder from the combined pool. Class representation
        // is proportional to alphabet size; no per-class weighting.
        for _ in 0..request.length - chars.len() {
            chars.push(pool[rng.gen_range(0..pool.len())]);
        }
    }

    chars.shuffle(rng);

    // Safety: all class alphabets are ASCII, symbols are filtered to
    // ASCII-graphic at intake.
    let password = unsafe { String::from_utf8_unchecked(chars) };

    Generated {
        password,
        classes: effective,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::super::classes::DEFAULT_SYMBOLS;
    use super::*;

    fn request(length: usize, classes: ClassSet) -> Request<'static> {
        Request {
            length,
            classes,
            symbols: DEFAULT_SYMBOLS,
        }
    }

    fn classes_present(password: &str) -> ClassSet {
        let mut present = ClassSet::none();
        for c in password.chars() {
            if c.is_ascii_uppercase() {
                present.set(CharacterClass::Uppercase, true);
            } else if c.is_ascii_lowercase() {
                present.set(CharacterClass::Lowercase, true);
            } else if c.is_ascii_digit() {
                present.set(CharacterClass::Digit, true);
            } else {
                present.set(CharacterClass::Symbol, true);
            }
        }
        present
    }

    #[test]
    fn every_enabled_class_is_represented() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let generated = generate(&request(12, ClassSet::all()), &mut rng);
            assert_eq!(generated.password.len(), 12);
            assert_eq!(classes_present(&generated.password), ClassSet::all());
            assert_eq!(generated.classes, ClassSet::all());
        }
    }

    #[test]
    fn length_is_exact_even_below_class_count() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let generated = generate(&request(2, ClassSet::all()), &mut rng);
            assert_eq!(generated.password.len(), 2);

            // Truncation keeps the highest-priority guarantees: one
            // uppercase and one lowercase character.
            let present = classes_present(&generated.password);
            assert!(present.contains(CharacterClass::Uppercase));
            assert!(present.contains(CharacterClass::Lowercase));
        }
    }

    #[test]
    fn length_one_keeps_top_priority_class() {
        let mut rng = StdRng::seed_from_u64(7);
        let generated = generate(&request(1, ClassSet::all()), &mut rng);
        assert_eq!(generated.password.len(), 1);
        assert!(generated.password.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn zero_length_yields_empty_password() {
        let mut rng = StdRng::seed_from_u64(0);
        let generated = generate(&request(0, ClassSet::all()), &mut rng);
        assert!(generated.password.is_empty());
    }

    #[test]
    fn empty_selection_falls_back_to_lowercase() {
        let mut rng = StdRng::seed_from_u64(3);
        let generated = generate(&request(10, ClassSet::none()), &mut rng);
        assert_eq!(
            generated.classes,
            ClassSet::none().with(CharacterClass::Lowercase)
        );
        assert_eq!(generated.password.len(), 10);
        assert!(generated.password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn empty_symbol_list_drops_the_class() {
        let mut rng = StdRng::seed_from_u64(11);
        let req = Request {
            length: 8,
            classes: ClassSet::none().with(CharacterClass::Symbol),
            symbols: b"",
        };
        let generated = generate(&req, &mut rng);
        assert_eq!(
            generated.classes,
            ClassSet::none().with(CharacterClass::Lowercase)
        );
        assert!(generated.password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn all_characters_come_from_enabled_alphabets() {
        let mut rng = StdRng::seed_from_u64(21);
        let classes = ClassSet::none()
            .with(CharacterClass::Digit)
            .with(CharacterClass::Symbol);
        let generated = generate(
            &Request {
                length: 40,
                classes,
                symbols: DEFAULT_SYMBOLS,
            },
            &mut rng,
        );
        for c in generated.password.bytes() {
            assert!(c.is_ascii_digit() || DEFAULT_SYMBOLS.contains(&c));
        }
    }

    #[test]
    fn custom_symbol_alphabet_is_honored() {
        let mut rng = StdRng::seed_from_u64(5);
        let req = Request {
            length: 30,
            classes: ClassSet::none().with(CharacterClass::Symbol),
            symbols: b"_-",
        };
        let generated = generate(&req, &mut rng);
        assert!(generated.password.bytes().all(|b| b == b'_' || b == b'-'));
    }

    #[test]
    fn repeated_calls_vary() {
        let mut rng = StdRng::seed_from_u64(99);
        let outputs: HashSet<String> = (0..50)
            .map(|_| generate(&request(16, ClassSet::all()), &mut rng).password)
            .collect();
        assert!(outputs.len() > 1);
    }
}

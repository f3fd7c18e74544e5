//! Letter validation for Ghost
//!
//! Validates a proposed letter against:
//! - Shape (exactly one character, lowercase a-z)
//! - Prefix viability (some dictionary word starts with fragment + letter)

use super::dictionary::Dictionary;
use crate::error::InvalidMove;

/// Check whether `letter` may be appended to `fragment`.
///
/// Input is expected pre-lowercased; "A" is rejected like any other
/// non-letter. Returns the letter as a `char` when playable.
pub fn validate_letter(
    fragment: &str,
    letter: &str,
    dictionary: &Dictionary,
) -> Result<char, InvalidMove> {
    let mut chars = letter.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_lowercase() => c,
        _ => return Err(InvalidMove::NotALetter(letter.to_string())),
    };

    let candidate = format!("{}{}", fragment, c);
    if !dictionary.has_word_with_prefix(&candidate) {
        return Err(InvalidMove::DeadEnd(candidate));
    }

    Ok(c)
}

/// Letters that keep `fragment` a prefix of some word, in alphabetical order.
pub fn playable_letters(fragment: &str, dictionary: &Dictionary) -> Vec<char> {
    let mut letters: Vec<char> = dictionary
        .words_with_prefix(fragment)
        .filter_map(|word| word[fragment.len()..].chars().next())
        .collect();
    letters.dedup();
    letters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::from_words(["cat", "car", "dog"])
    }

    #[test]
    fn test_valid_letter() {
        assert_eq!(validate_letter("", "c", &dict()), Ok('c'));
        assert_eq!(validate_letter("ca", "t", &dict()), Ok('t'));
        assert_eq!(validate_letter("ca", "r", &dict()), Ok('r'));
    }

    #[test]
    fn test_dead_end() {
        assert_eq!(
            validate_letter("ca", "x", &dict()),
            Err(InvalidMove::DeadEnd("cax".to_string()))
        );
        assert_eq!(
            validate_letter("", "e", &dict()),
            Err(InvalidMove::DeadEnd("e".to_string()))
        );
    }

    #[test]
    fn test_not_a_letter() {
        for bad in ["", "ab", "A", "7", " ", "é"] {
            assert_eq!(
                validate_letter("", bad, &dict()),
                Err(InvalidMove::NotALetter(bad.to_string())),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_shape_checked_before_dictionary() {
        // "T" would continue "ca" if lowercased, but uppercase is not normalized
        assert!(matches!(
            validate_letter("ca", "T", &dict()),
            Err(InvalidMove::NotALetter(_))
        ));
    }

    #[test]
    fn test_playable_letters() {
        assert_eq!(playable_letters("", &dict()), vec!['c', 'd']);
        assert_eq!(playable_letters("ca", &dict()), vec!['r', 't']);
        assert!(playable_letters("cat", &dict()).is_empty());
        assert!(playable_letters("x", &dict()).is_empty());
    }
}

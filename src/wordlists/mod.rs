//! Word lists
//!
//! A builtin list of common five-letter words plus a loader for external
//! newline/whitespace-delimited dictionaries.

mod embedded;
pub mod loader;

pub use embedded::BUILTIN;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_words_are_valid() {
        for &word in BUILTIN {
            assert_eq!(word.len(), 5, "word '{word}' is not 5 letters");
            assert!(
                word.bytes().all(|b| b.is_ascii_lowercase()),
                "word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn builtin_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = BUILTIN.iter().collect();
        assert_eq!(unique.len(), BUILTIN.len());
    }

    #[test]
    fn builtin_is_large_enough_to_play() {
        assert!(BUILTIN.len() >= 200);
    }
}

//! Guess selection
//!
//! The opening guess is sampled from words with five distinct letters drawn
//! from the most frequent letters in the pool; later guesses are sampled
//! uniformly from whatever candidates remain. All sampling goes through an
//! injected `Rng` so callers can make runs reproducible.

use super::ColorState;
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// How many of the most frequent letters the opening guess may draw from
const COMMON_LETTER_COUNT: usize = 9;

/// Pick an opening guess from `pool`
///
/// Restricts the pool to words with five pairwise-distinct letters, ranks the
/// letters of that subset by frequency, and excludes every word using a letter
/// outside the top nine (ties in the ranking break alphabetically). Each
/// restriction falls back to the previous pool when it would leave nothing to
/// sample. Returns `None` only for an empty input pool.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_assistant::core::Word;
/// use wordle_assistant::engine::first_guess;
///
/// let pool = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
/// let mut rng = StdRng::seed_from_u64(7);
/// let guess = first_guess(&pool, &mut rng).unwrap();
/// assert!(pool.contains(guess));
/// ```
pub fn first_guess<'a, R: Rng + ?Sized>(pool: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    let distinct: Vec<&Word> = pool.iter().filter(|w| w.has_distinct_letters()).collect();
    let distinct = if distinct.is_empty() {
        pool.iter().collect()
    } else {
        distinct
    };

    let rare = rare_letters(&distinct);
    let exclusion = ColorState::excluding(rare);

    let biased: Vec<&Word> = distinct
        .iter()
        .copied()
        .filter(|w| exclusion.is_consistent(w))
        .collect();
    let biased = if biased.is_empty() { distinct } else { biased };

    biased.choose(rng).copied()
}

/// Pick the next guess: a uniform sample from `pool` minus `rejected`
///
/// `rejected` holds words the user has waved off during the current selection
/// attempt; it does not shrink the canonical pool. Returns `None` when nothing
/// is left to offer.
pub fn next_guess<'a, R: Rng + ?Sized>(
    pool: &'a [Word],
    rejected: &[Word],
    rng: &mut R,
) -> Option<&'a Word> {
    let available: Vec<&Word> = pool.iter().filter(|w| !rejected.contains(w)).collect();
    available.choose(rng).copied()
}

/// Letters observed in `words` that fall outside the nine most frequent
///
/// Ranking is by descending occurrence count, ties broken alphabetically, so
/// the result is deterministic for a given pool.
fn rare_letters(words: &[&Word]) -> Vec<u8> {
    let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
    for word in words {
        for &letter in word.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(u8, usize)> = counts.into_iter().collect();
    ranked.sort_by_key(|&(letter, count)| (Reverse(count), letter));

    ranked
        .into_iter()
        .skip(COMMON_LETTER_COUNT)
        .map(|(letter, _)| letter)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(words: &[&str]) -> Vec<Word> {
        words.iter().map(|&w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn first_guess_empty_pool_is_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(first_guess(&[], &mut rng).is_none());
    }

    #[test]
    fn first_guess_is_a_pool_member_with_distinct_letters() {
        let candidates = pool(&["crane", "slate", "speed", "trace", "geese"]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let guess = first_guess(&candidates, &mut rng).unwrap();
            assert!(candidates.contains(guess));
            assert!(guess.has_distinct_letters());
        }
    }

    #[test]
    fn first_guess_falls_back_when_no_distinct_words() {
        let candidates = pool(&["speed", "geese", "llama"]);
        let mut rng = StdRng::seed_from_u64(3);
        let guess = first_guess(&candidates, &mut rng).unwrap();
        assert!(candidates.contains(guess));
    }

    #[test]
    fn first_guess_avoids_rare_letter_words() {
        // Nine words share the letters {a, c, e, i, l, n, r, s, t}; JUMPY is
        // built entirely from letters outside that top nine
        let candidates = pool(&[
            "crane", "slate", "trace", "stale", "least", "scale", "clear", "learn", "train",
            "jumpy",
        ]);

        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let guess = first_guess(&candidates, &mut rng).unwrap();
            assert_ne!(guess.text(), "jumpy", "seed {seed} picked a rare-letter word");
        }
    }

    #[test]
    fn first_guess_is_deterministic_per_seed() {
        let candidates = pool(&["crane", "slate", "trace", "stale", "least"]);
        let a = first_guess(&candidates, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = first_guess(&candidates, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn next_guess_skips_rejected_words() {
        let candidates = pool(&["crane", "slate"]);
        let rejected = pool(&["crane"]);

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let guess = next_guess(&candidates, &rejected, &mut rng).unwrap();
            assert_eq!(guess.text(), "slate");
        }
    }

    #[test]
    fn next_guess_none_when_everything_rejected() {
        let candidates = pool(&["crane"]);
        let rejected = pool(&["crane"]);
        let mut rng = StdRng::seed_from_u64(5);
        assert!(next_guess(&candidates, &rejected, &mut rng).is_none());
    }

    #[test]
    fn next_guess_none_on_empty_pool() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(next_guess(&[], &[], &mut rng).is_none());
    }

    #[test]
    fn rare_letters_ranking_breaks_ties_alphabetically() {
        // Ten distinct letters across two words, all with equal counts, so the
        // alphabetical order decides which one falls outside the top nine
        let words = pool(&["bacon", "fudge"]);
        let refs: Vec<&Word> = words.iter().collect();

        let mut rare = rare_letters(&refs);
        rare.sort_unstable();
        // Letters: a b c d e f g n o u — the alphabetically last one loses
        assert_eq!(rare, vec![b'u']);
    }
}

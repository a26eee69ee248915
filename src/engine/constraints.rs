//! Accumulated color constraints
//!
//! `ColorState` is the memory of the game: every piece of feedback ever
//! recorded, reduced to three collections (green, yellow, black). A candidate
//! word survives a round exactly when it is consistent with all three.

use crate::core::{Color, Feedback, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Constraints accumulated from all feedback so far
///
/// - `green`: position → letter known to be exactly correct (at most one
///   letter per position).
/// - `yellow`: (position, letter) pairs present in the solution but not at
///   that position.
/// - `black`: letters absent from the solution.
///
/// A letter never sits in `black` while it is also green or yellow somewhere:
/// recording black for such a letter re-files it as yellow instead, which is
/// how Wordle treats repeated letters with mixed correctness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorState {
    green: FxHashMap<usize, u8>,
    yellow: FxHashSet<(usize, u8)>,
    black: FxHashSet<u8>,
}

impl ColorState {
    /// Create an empty state (start of a game)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state that only excludes the given letters
    ///
    /// Used by the opening-guess heuristic to bias sampling away from rare
    /// letters.
    #[must_use]
    pub fn excluding(letters: impl IntoIterator<Item = u8>) -> Self {
        Self {
            black: letters.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Number of positions known green
    #[must_use]
    pub fn green_count(&self) -> usize {
        self.green.len()
    }

    /// True exactly when all five positions are solved
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.green.len() == 5
    }

    /// Whether a position already has a green letter recorded
    #[must_use]
    pub fn is_green_at(&self, position: usize) -> bool {
        self.green.contains_key(&position)
    }

    /// The letter recorded green at a position, if any
    #[must_use]
    pub fn green_letter_at(&self, position: usize) -> Option<u8> {
        self.green.get(&position).copied()
    }

    /// Whether a letter appears anywhere in the green or yellow collections
    fn is_known_present(&self, letter: u8) -> bool {
        self.green.values().any(|&l| l == letter)
            || self.yellow.iter().any(|&(_, l)| l == letter)
    }

    /// Check whether `word` is still consistent with every recorded clue
    ///
    /// Pure predicate, no side effects:
    /// - every green position must hold exactly its letter;
    /// - every yellow letter must occur somewhere else than its clued
    ///   position;
    /// - no black letter may occur at all.
    #[must_use]
    pub fn is_consistent(&self, word: &Word) -> bool {
        for (&position, &letter) in &self.green {
            if word.letter_at(position) != letter {
                return false;
            }
        }

        for &(position, letter) in &self.yellow {
            if word.letter_at(position) == letter || !word.contains_letter(letter) {
                return false;
            }
        }

        for &letter in &self.black {
            if word.contains_letter(letter) {
                return false;
            }
        }

        true
    }

    /// Record one round of feedback for `word`
    ///
    /// A (position, letter) pair already recorded green is never reclassified.
    /// Black feedback for a letter that is already green or yellow somewhere
    /// is re-filed as yellow at this position, so a repeated letter with mixed
    /// correctness is never treated as wholly absent. Greens and yellows are
    /// applied before blacks: a guess like THERE against CRANE colors the
    /// middle E black and the last E green, and the green must land first or
    /// the black would wrongly exclude every word containing E.
    pub fn record(&mut self, word: &Word, feedback: Feedback) {
        for position in 0..5 {
            let letter = word.letter_at(position);
            if self.green.get(&position) == Some(&letter) {
                continue;
            }
            match feedback.color_at(position) {
                Color::Green => {
                    self.green.insert(position, letter);
                }
                Color::Yellow => {
                    self.yellow.insert((position, letter));
                }
                Color::Black => {}
            }
        }

        for position in 0..5 {
            if feedback.color_at(position) != Color::Black {
                continue;
            }
            let letter = word.letter_at(position);
            if self.green.get(&position) == Some(&letter) {
                continue;
            }
            if self.is_known_present(letter) {
                self.yellow.insert((position, letter));
            } else {
                self.black.insert(letter);
            }
        }
    }

    /// Narrow a pool to the words still consistent with this state
    pub fn filter_pool(&self, pool: &mut Vec<Word>) {
        pool.retain(|word| self.is_consistent(word));
    }
}

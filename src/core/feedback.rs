//! Per-guess color feedback
//!
//! A `Feedback` holds one color per position for a single guessed word. It can
//! be computed from a known solution (using Wordle's duplicate-letter rules) or
//! parsed from interactive input.

use super::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// The color assigned to one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Letter is correct at this position
    Green,
    /// Letter is in the solution but not at this position
    Yellow,
    /// Letter is absent from the solution
    Black,
}

/// Colors for all five positions of one guessed word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([Color; 5]);

impl Feedback {
    /// All-green feedback (the guess is the solution)
    pub const SOLVED: Self = Self([Color::Green; 5]);

    /// Create feedback from explicit per-position colors
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; 5]) -> Self {
        Self(colors)
    }

    /// Get the color at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn color_at(self, position: usize) -> Color {
        self.0[position]
    }

    /// Get all five colors
    #[inline]
    #[must_use]
    pub const fn colors(self) -> [Color; 5] {
        self.0
    }

    /// Check whether every position is green
    #[must_use]
    pub fn is_all_green(self) -> bool {
        self.0.iter().all(|&c| c == Color::Green)
    }

    /// Compute the feedback Wordle would show for `guess` against `solution`
    ///
    /// Implements the official duplicate-letter rules:
    /// 1. First pass marks greens and claims those letters from the solution.
    /// 2. Second pass marks yellows while unclaimed occurrences remain; any
    ///    further repeats of the same letter come back black.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{Color, Feedback, Word};
    ///
    /// let guess = Word::new("slate").unwrap();
    /// let solution = Word::new("crane").unwrap();
    /// let feedback = Feedback::from_solution(&guess, &solution);
    ///
    /// // S and L and T are absent, A and E are exactly placed
    /// assert_eq!(
    ///     feedback.colors(),
    ///     [Color::Black, Color::Black, Color::Green, Color::Black, Color::Green]
    /// );
    /// ```
    #[must_use]
    pub fn from_solution(guess: &Word, solution: &Word) -> Self {
        let mut colors = [Color::Black; 5];

        // Letters of the solution not yet claimed by a green or yellow
        let mut unclaimed: FxHashMap<u8, u8> = FxHashMap::default();
        for &letter in solution.letters() {
            *unclaimed.entry(letter).or_insert(0) += 1;
        }

        // First pass: greens claim their letters
        for position in 0..5 {
            let letter = guess.letter_at(position);
            if letter == solution.letter_at(position) {
                colors[position] = Color::Green;
                if let Some(count) = unclaimed.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: yellows from whatever is left unclaimed
        for position in 0..5 {
            if colors[position] == Color::Green {
                continue;
            }
            let letter = guess.letter_at(position);
            if let Some(count) = unclaimed.get_mut(&letter)
                && *count > 0
            {
                colors[position] = Color::Yellow;
                *count -= 1;
            }
        }

        Self(colors)
    }

    /// Parse feedback from a five-character string of `g`/`y`/`b`
    ///
    /// Case-insensitive. Returns `None` for any other input.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{Color, Feedback};
    ///
    /// let feedback = Feedback::parse("bgYyb").unwrap();
    /// assert_eq!(feedback.color_at(1), Color::Green);
    /// assert_eq!(feedback.color_at(2), Color::Yellow);
    ///
    /// assert!(Feedback::parse("bgx").is_none());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut colors = [Color::Black; 5];
        let mut chars = input.chars();

        for slot in &mut colors {
            *slot = Color::parse(chars.next()?)?;
        }

        // Reject trailing characters
        if chars.next().is_some() {
            return None;
        }

        Some(Self(colors))
    }
}

impl Color {
    /// Parse a single color letter (`g`/`y`/`b`, case-insensitive)
    #[must_use]
    pub fn parse(c: char) -> Option<Self> {
        match c {
            'g' | 'G' => Some(Self::Green),
            'y' | 'Y' => Some(Self::Yellow),
            'b' | 'B' => Some(Self::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Black => "black",
        };
        write!(f, "{name}")
    }
}

//! Wordle Assistant
//!
//! An interactive helper for the word-guessing game Wordle. It keeps a pool of
//! candidate five-letter words, records green/yellow/black feedback after each
//! guess, filters the pool down to the words still consistent with everything
//! seen so far, and suggests the next guess. The opening guess is biased toward
//! words built from the most frequent letters with no repeats; later guesses
//! are sampled uniformly from the remaining candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assistant::core::{Feedback, Word};
//! use wordle_assistant::engine::ColorState;
//!
//! let guess = Word::new("slate").unwrap();
//! let solution = Word::new("crane").unwrap();
//!
//! let feedback = Feedback::from_solution(&guess, &solution);
//! let mut state = ColorState::new();
//! state.record(&guess, feedback);
//! assert!(state.is_consistent(&solution));
//! ```

// Core domain types
pub mod core;

// Constraint filtering and guess selection
pub mod engine;

// Word lists
pub mod wordlists;

// Interactive assistant loop
pub mod commands;

// Terminal output formatting
pub mod output;

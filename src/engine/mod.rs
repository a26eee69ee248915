//! Constraint filtering and guess selection
//!
//! `ColorState` accumulates feedback across rounds and decides which candidate
//! words remain consistent; `heuristic` picks the next word to guess.

mod constraints;
pub mod heuristic;

pub use constraints::ColorState;
pub use heuristic::{first_guess, next_guess};

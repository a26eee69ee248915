//! Core domain types
//!
//! The fundamental types of the game: validated five-letter words and the
//! per-position color feedback a guess receives. Everything here is pure and
//! directly testable.

mod feedback;
mod word;

pub use feedback::{Color, Feedback};
pub use word::{Word, WordError};

//! Assistant commands

pub mod play;
pub mod report;

pub use play::{GuessCommand, run_play};
pub use report::{GameReport, RoundRecord};

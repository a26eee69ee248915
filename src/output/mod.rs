//! Terminal output formatting

mod render;

pub use render::{render_candidates, render_guess};

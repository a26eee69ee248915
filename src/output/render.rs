//! Colored rendering of guesses and candidate listings

use crate::core::{Color, Feedback, Word};
use colored::Colorize;

/// Render a guessed word as colored tiles matching its feedback
#[must_use]
pub fn render_guess(word: &Word, feedback: Feedback) -> String {
    let mut tiles = Vec::with_capacity(5);

    for position in 0..5 {
        let letter = (word.letter_at(position) as char).to_ascii_uppercase().to_string();
        let tile = match feedback.color_at(position) {
            Color::Green => letter.black().on_green(),
            Color::Yellow => letter.black().on_yellow(),
            Color::Black => letter.white().on_bright_black(),
        };
        tiles.push(tile.to_string());
    }

    tiles.join(" ")
}

/// Render a candidate pool as uppercase columns, eight words per line
#[must_use]
pub fn render_candidates(pool: &[Word]) -> String {
    pool.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .map(|w| w.text().to_uppercase())
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

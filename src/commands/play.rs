//! Interactive assistant loop
//!
//! Drives the guess/feedback/filter cycle: propose a guess, let the user
//! confirm or override it, collect color feedback (automatically when the
//! solution is known), narrow the candidate pool, and repeat until all five
//! positions are green or nothing is left.

use super::report::{GameReport, RoundRecord};
use crate::core::{Color, Feedback, Word};
use crate::engine::{self, ColorState};
use crate::output::{render_candidates, render_guess};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What the user wants to do with a proposed guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessCommand {
    /// Play the proposed word
    Confirm,
    /// Reject it and sample another candidate
    Reshuffle,
    /// Play a literal word instead (need not be in the pool)
    Substitute(Word),
    /// Show the remaining candidates
    List,
}

/// Decode one line of guess-confirmation input
///
/// Empty input confirms the proposal. Anything that is neither a command nor
/// a valid five-letter word comes back as `None` and the caller re-prompts.
#[must_use]
pub fn parse_guess_command(input: &str) -> Option<GuessCommand> {
    match input.to_lowercase().as_str() {
        "" | "y" | "yes" => Some(GuessCommand::Confirm),
        "n" | "no" | "r" | "reshuffle" => Some(GuessCommand::Reshuffle),
        "l" | "list" | "p" => Some(GuessCommand::List),
        other => Word::new(other).ok().map(GuessCommand::Substitute),
    }
}

/// Run the interactive assistant over a starting pool
///
/// When `solution` is given, feedback is computed automatically; otherwise the
/// user is prompted for colors after every guess. All random sampling draws
/// from `rng`, and prompts read from `input` (stdin in the binary).
///
/// Returns the finished game report after printing it.
///
/// # Errors
///
/// Returns an error if the input stream closes mid-game or stdout cannot be
/// written.
pub fn run_play<R: Rng + ?Sized, I: BufRead>(
    mut pool: Vec<Word>,
    solution: Option<&Word>,
    rng: &mut R,
    input: &mut I,
) -> Result<GameReport> {
    println!("Wordle assistant: {} candidate words loaded", pool.len());
    if solution.is_none() {
        println!("After each guess, report the colors Wordle showed you (g/y/b).");
    }

    let mut state = ColorState::new();
    let mut rounds: Vec<RoundRecord> = Vec::new();
    let mut round = 1;
    let mut solved = false;

    loop {
        if pool.is_empty() {
            println!(
                "\n{}",
                "No candidates remain; the recorded feedback matches no known word.".red()
            );
            break;
        }

        println!("\nRound {round}: {} candidates", pool.len());
        let Some(guess) = resolve_guess(&pool, round == 1, rng, input)? else {
            break;
        };

        rounds.push(RoundRecord {
            round,
            guess: guess.text().to_string(),
            pool_size: pool.len(),
        });

        // A played pool member is never offered again
        if let Some(index) = pool.iter().position(|w| *w == guess) {
            pool.remove(index);
        }

        let feedback = match solution {
            Some(solution) => Feedback::from_solution(&guess, solution),
            None => collect_feedback(&guess, &state, input)?,
        };
        println!("{}", render_guess(&guess, feedback));

        state.record(&guess, feedback);
        if state.is_solved() {
            solved = true;
            print_win_banner(round);
            break;
        }

        state.filter_pool(&mut pool);
        round += 1;
    }

    let report = GameReport::new(solved, rounds);
    println!("\n{}", report.to_json()?);
    Ok(report)
}

/// Propose guesses until the user accepts or substitutes one
///
/// Rejections are scoped to this call: a reshuffled word stays in the
/// canonical pool and can be proposed again next round. Returns `None` only
/// when there is nothing at all to offer.
fn resolve_guess<R: Rng + ?Sized, I: BufRead>(
    pool: &[Word],
    opening: bool,
    rng: &mut R,
    input: &mut I,
) -> Result<Option<Word>> {
    let mut rejected: Vec<Word> = Vec::new();

    loop {
        let proposal = if opening {
            let available: Vec<Word> = pool
                .iter()
                .filter(|w| !rejected.contains(w))
                .cloned()
                .collect();
            engine::first_guess(&available, rng).cloned()
        } else {
            engine::next_guess(pool, &rejected, rng).cloned()
        };

        let Some(proposal) = proposal else {
            if rejected.is_empty() {
                return Ok(None);
            }
            println!("Every candidate was waved off; offering them again.");
            rejected.clear();
            continue;
        };

        println!("Suggested guess: {}", proposal.text().to_uppercase().bold());
        loop {
            let line = prompt(
                input,
                "play it? (enter = yes, n = another, l = list, or type a word)",
            )?;
            match parse_guess_command(&line) {
                Some(GuessCommand::Confirm) => return Ok(Some(proposal)),
                Some(GuessCommand::Substitute(word)) => return Ok(Some(word)),
                Some(GuessCommand::Reshuffle) => {
                    rejected.push(proposal);
                    break;
                }
                Some(GuessCommand::List) => println!("{}", render_candidates(pool)),
                None => {
                    println!("Enter nothing to accept, 'n' to reshuffle, 'l' to list, or a five-letter word.");
                }
            }
        }
    }
}

/// Ask the user for the colors a guess received
///
/// Accepts a whole five-character pattern up front; an empty line switches to
/// letter-by-letter prompts. A position is filled in green without asking only
/// when the guess repeats the letter already known green there; a substituted
/// guess with a different letter at that position is still prompted for.
fn collect_feedback<I: BufRead>(
    guess: &Word,
    state: &ColorState,
    input: &mut I,
) -> Result<Feedback> {
    loop {
        let line = prompt(
            input,
            "feedback pattern (five of g/y/b, or enter for letter-by-letter)",
        )?;
        if line.is_empty() {
            break;
        }
        if let Some(feedback) = Feedback::parse(&line) {
            return Ok(feedback);
        }
        println!("Patterns are exactly five letters drawn from g, y, b.");
    }

    let mut colors = [Color::Black; 5];
    for position in 0..5 {
        if state.green_letter_at(position) == Some(guess.letter_at(position)) {
            colors[position] = Color::Green;
            continue;
        }

        let letter = (guess.letter_at(position) as char).to_ascii_uppercase();
        loop {
            let line = prompt(
                input,
                &format!("color for {letter} at position {} (g/y/b)", position + 1),
            )?;
            let mut chars = line.chars();
            if let (Some(c), None) = (chars.next(), chars.next())
                && let Some(color) = Color::parse(c)
            {
                colors[position] = color;
                break;
            }
            println!("Please answer g, y, or b.");
        }
    }

    Ok(Feedback::new(colors))
}

fn print_win_banner(round: usize) {
    let rounds_label = if round == 1 { "round" } else { "rounds" };
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        format!("  Solved in {round} {rounds_label}!")
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print a prompt and read one trimmed line
fn prompt<I: BufRead>(input: &mut I, text: &str) -> Result<String> {
    print!("{text}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    anyhow::ensure!(read > 0, "input stream closed");

    Ok(line.trim().to_string())
}

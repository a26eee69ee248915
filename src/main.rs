//! Wordle Assistant - CLI
//!
//! Suggests Wordle guesses from a candidate pool, narrowing it with the
//! green/yellow/black feedback you report (or compute automatically with a
//! known solution).

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use wordle_assistant::commands::run_play;
use wordle_assistant::core::Word;
use wordle_assistant::wordlists::BUILTIN;
use wordle_assistant::wordlists::loader::{load_from_file, words_from_slice};

#[derive(Parser)]
#[command(
    name = "wordle_assistant",
    about = "Interactive Wordle assistant with frequency-biased guess suggestions",
    version
)]
struct Cli {
    /// Dictionary file (newline/whitespace-delimited words); uses the builtin
    /// list when omitted
    #[arg(short = 'w', long)]
    wordlist: Option<String>,

    /// Known solution word: feedback is computed instead of prompted
    #[arg(short, long)]
    solution: Option<String>,

    /// RNG seed for reproducible suggestions
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pool = load_pool(cli.wordlist.as_deref())?;
    anyhow::ensure!(!pool.is_empty(), "word list contains no five-letter words");

    let solution = cli
        .solution
        .map(Word::new)
        .transpose()
        .context("the solution must be a five-letter word")?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut input = io::stdin().lock();
    run_play(pool, solution.as_ref(), &mut rng, &mut input)?;
    Ok(())
}

/// Load the starting pool from a file, or fall back to the builtin list
fn load_pool(path: Option<&str>) -> Result<Vec<Word>> {
    match path {
        Some(path) => {
            load_from_file(path).with_context(|| format!("failed to read word list '{path}'"))
        }
        None => Ok(words_from_slice(BUILTIN)),
    }
}

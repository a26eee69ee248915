//! Word list loading
//!
//! Reads newline/whitespace-delimited dictionaries into validated `Word`s,
//! dropping entries that are not five ASCII letters.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a whitespace-delimited dictionary file
///
/// Entries that are not valid five-letter words are skipped; duplicates are
/// dropped, first occurrence wins.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_assistant::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words_alpha.txt").unwrap();
/// println!("loaded {} candidate words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_iter(content.split_whitespace()))
}

/// Convert a builtin string slice into a word pool
///
/// # Examples
/// ```
/// use wordle_assistant::wordlists::BUILTIN;
/// use wordle_assistant::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(BUILTIN);
/// assert_eq!(words.len(), BUILTIN.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_iter(slice.iter().copied())
}

fn words_from_iter<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen: FxHashSet<Word> = FxHashSet::default();
    let mut words = Vec::new();

    for entry in entries {
        if let Ok(word) = Word::new(entry)
            && seen.insert(word.clone())
        {
            words.push(word);
        }
    }

    words
}

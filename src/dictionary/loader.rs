//! Word list loading utilities
//!
//! Reads newline-separated word lists for the offline dictionary.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Lines are trimmed and lowercased; blank lines and entries with anything
/// other than ASCII letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_helper::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Normalize raw entries into lowercase words
///
/// # Examples
/// ```
/// use wordle_helper::dictionary::loader::words_from_lines;
///
/// let words = words_from_lines(["Crane", " slate ", "", "x-ray"]);
/// assert_eq!(words, vec!["crane", "slate"]);
/// ```
#[must_use]
pub fn words_from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
                None
            } else {
                Some(trimmed.to_ascii_lowercase())
            }
        })
        .collect()
}

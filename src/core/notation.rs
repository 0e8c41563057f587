//! Annotated guess notation
//!
//! A guess is written as the word played, with the feedback folded into it:
//! - uppercase letter = found (right letter, right position)
//! - letter followed by `?` = present (in the word, not at this position)
//! - lowercase letter = missing (not in the word at all)
//!
//! `Fundi?` reads as F found at 1, u/n/d missing, i present but not at 5.

use std::collections::BTreeSet;

/// Feedback carried by a single letter of an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Confirmed at this exact position
    Found,
    /// In the solution, but not at this position
    Present,
    /// Not in the solution
    Missing,
}

/// One decoded letter: its 1-based position, lowercased letter and feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub position: usize,
    pub letter: char,
    pub feedback: Feedback,
}

/// Per-letter signals of one attempt, split into three ordered emission lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedAttempt {
    /// (letter, position) pairs for present letters
    pub present: Vec<(char, usize)>,
    /// Letters confirmed absent
    pub missing: Vec<char>,
    /// (position, letter) pairs for found letters
    pub found: Vec<(usize, char)>,
}

/// Scan an attempt left to right and classify every letter
///
/// The position counter advances once per letter; `?` markers never consume a
/// position. Characters that are neither letters nor markers are skipped, so
/// validation is expected to have run first.
///
/// # Examples
/// ```
/// use wordle_helper::core::{Feedback, decode_marks};
///
/// let marks = decode_marks("ra?the");
/// assert_eq!(marks.len(), 5);
/// assert_eq!(marks[1].letter, 'a');
/// assert_eq!(marks[1].position, 2);
/// assert_eq!(marks[1].feedback, Feedback::Present);
/// ```
#[must_use]
pub fn decode_marks(attempt: &str) -> Vec<Mark> {
    let mut marks = Vec::with_capacity(attempt.len());
    let mut position = 0;
    let mut chars = attempt.chars().peekable();

    while let Some(symbol) = chars.next() {
        if !symbol.is_ascii_alphabetic() {
            continue;
        }
        position += 1;

        let feedback = if chars.peek() == Some(&'?') {
            Feedback::Present
        } else if symbol.is_ascii_lowercase() {
            Feedback::Missing
        } else {
            Feedback::Found
        };

        marks.push(Mark {
            position,
            letter: symbol.to_ascii_lowercase(),
            feedback,
        });
    }

    marks
}

/// Decode an attempt into its present/missing/found emission lists
///
/// # Examples
/// ```
/// use wordle_helper::core::decode_attempt;
///
/// let decoded = decode_attempt("Fundi?");
/// assert_eq!(decoded.found, vec![(1, 'f')]);
/// assert_eq!(decoded.missing, vec!['u', 'n', 'd']);
/// assert_eq!(decoded.present, vec![('i', 5)]);
/// ```
#[must_use]
pub fn decode_attempt(attempt: &str) -> DecodedAttempt {
    let mut decoded = DecodedAttempt::default();

    for mark in decode_marks(attempt) {
        match mark.feedback {
            Feedback::Present => decoded.present.push((mark.letter, mark.position)),
            Feedback::Missing => decoded.missing.push(mark.letter),
            Feedback::Found => decoded.found.push((mark.position, mark.letter)),
        }
    }

    decoded
}

/// Plain lowercase words of a guess history, markers stripped, duplicates dropped
#[must_use]
pub fn played_words<S: AsRef<str>>(attempts: &[S]) -> BTreeSet<String> {
    attempts
        .iter()
        .map(|a| {
            a.as_ref()
                .chars()
                .filter(|&c| c != '?')
                .map(|c| c.to_ascii_lowercase())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_present_and_missing() {
        let decoded = decode_attempt("ra?the");

        assert_eq!(decoded.present, vec![('a', 2)]);
        assert_eq!(decoded.missing, vec!['r', 't', 'h', 'e']);
        assert!(decoded.found.is_empty());
    }

    #[test]
    fn decode_found_letter() {
        let decoded = decode_attempt("Fundi?");

        assert_eq!(decoded.found, vec![(1, 'f')]);
        assert_eq!(decoded.missing, vec!['u', 'n', 'd']);
        assert_eq!(decoded.present, vec![('i', 5)]);
    }

    #[test]
    fn marker_does_not_consume_position() {
        let marks = decode_marks("a?b?c?d?e?");
        let positions: Vec<usize> = marks.iter().map(|m| m.position).collect();

        assert_eq!(positions, vec![1, 2, 3, 4, 5]);
        assert!(marks.iter().all(|m| m.feedback == Feedback::Present));
    }

    #[test]
    fn uppercase_with_marker_is_present() {
        let decoded = decode_attempt("A?bcde");

        assert_eq!(decoded.present, vec![('a', 1)]);
        assert!(decoded.found.is_empty());
    }

    #[test]
    fn all_uppercase_is_all_found() {
        let decoded = decode_attempt("CRANE");

        assert_eq!(
            decoded.found,
            vec![(1, 'c'), (2, 'r'), (3, 'a'), (4, 'n'), (5, 'e')]
        );
        assert!(decoded.present.is_empty());
        assert!(decoded.missing.is_empty());
    }

    #[test]
    fn leading_marker_is_ignored() {
        let marks = decode_marks("?abcde");
        assert_eq!(marks.len(), 5);
        assert_eq!(marks[0].position, 1);
        assert_eq!(marks[0].feedback, Feedback::Missing);
    }

    #[test]
    fn played_words_strip_markers_and_dedupe() {
        let words = played_words(&["Fundi?", "ra?the", "fUNDI?"]);
        let words: Vec<&str> = words.iter().map(String::as_str).collect();

        assert_eq!(words, vec!["fundi", "rathe"]);
    }
}

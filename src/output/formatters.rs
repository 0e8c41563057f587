//! Formatting utilities for terminal output

use crate::core::{Constraints, Feedback, Mark, SearchPattern, Slot};
use colored::{ColoredString, Colorize};

/// Color one decoded letter the way the game shows it
#[must_use]
pub fn colored_mark(mark: &Mark) -> ColoredString {
    let letter = mark.letter.to_ascii_uppercase().to_string();
    match mark.feedback {
        Feedback::Found => letter.black().on_green(),
        Feedback::Present => letter.black().on_yellow(),
        Feedback::Missing => letter.white().on_bright_black(),
    }
}

/// One line per position: fixed letter or the size of its class
#[must_use]
pub fn describe_slots(pattern: &SearchPattern) -> Vec<String> {
    pattern
        .slots()
        .iter()
        .enumerate()
        .map(|(i, slot)| match slot {
            Slot::Fixed(letter) => format!("{}: {letter}", i + 1),
            Slot::Class(letters) if letters.is_empty() => {
                format!("{}: (no letter possible)", i + 1)
            }
            Slot::Class(letters) => format!("{}: {} letters", i + 1, letters.len()),
        })
        .collect()
}

/// Present letters with the positions they were ruled out from, e.g. `a(2) i(5)`
#[must_use]
pub fn describe_present(constraints: &Constraints) -> String {
    constraints
        .present()
        .iter()
        .map(|(letter, positions)| {
            let positions: Vec<String> = positions.iter().map(ToString::to_string).collect();
            format!("{letter}({})", positions.join(","))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

//! Response text
//!
//! Four sections in fixed order, each cut to the display limit. Every heading
//! is followed by a blank line:
//!
//! ```text
//! Possible solutions:
//!
//! <words>
//!
//! Helper words for uncovering untried letters:
//!
//! <words>
//!
//! Helper words for positioning uncovered letters:
//!
//! <words>
//!
//! Miscellaneous helper words:
//!
//! <words>
//! ```

use crate::solver::{HelperKind, RankedWord, Suggestions};

pub const SOLUTIONS_HEADING: &str = "Possible solutions:";

/// Heading of a helper section
#[must_use]
pub const fn helper_heading(kind: HelperKind) -> &'static str {
    match kind {
        HelperKind::UnknownLetters => "Helper words for uncovering untried letters:",
        HelperKind::Positioning => "Helper words for positioning uncovered letters:",
        HelperKind::Generic => "Miscellaneous helper words:",
    }
}

/// Assemble the response text from ranked suggestions
///
/// Only the first `limit` words of each section are shown.
#[must_use]
pub fn render_response(suggestions: &Suggestions, limit: usize) -> String {
    let mut lines: Vec<&str> = Vec::new();

    lines.push(SOLUTIONS_HEADING);
    lines.push("");
    push_words(&mut lines, &suggestions.possible_solutions, limit);

    for kind in HelperKind::ALL {
        lines.push("");
        lines.push(helper_heading(kind));
        lines.push("");
        push_words(&mut lines, suggestions.helpers(kind), limit);
    }

    lines.join("\n")
}

fn push_words<'a>(lines: &mut Vec<&'a str>, words: &'a [RankedWord], limit: usize) {
    lines.extend(words.iter().take(limit).map(|r| r.word.as_str()));
}

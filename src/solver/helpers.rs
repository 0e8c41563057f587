//! Helper word generators
//!
//! Helper words are not meant to be the answer. They are guesses chosen to
//! learn as much as possible from the next round of feedback.

use super::ranking::LetterRanks;
use crate::core::{Constraints, SearchPattern, Slot};
use std::collections::BTreeSet;

/// The kinds of helper word lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelperKind {
    /// Words made only of letters nobody has classified yet
    UnknownLetters,
    /// Words mixing unclassified letters with present letters at untried positions
    Positioning,
    /// Any word of the right length
    Generic,
}

impl HelperKind {
    /// Every kind, in response order
    pub const ALL: [Self; 3] = [Self::UnknownLetters, Self::Positioning, Self::Generic];

    /// Search pattern for this kind, or `None` when some position has no letter to offer
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Constraints;
    /// use wordle_helper::solver::{HelperKind, LetterRanks};
    ///
    /// let constraints = Constraints::from_attempts(&["CRANE"]);
    /// let unknown = LetterRanks::default();
    ///
    /// assert!(HelperKind::UnknownLetters.pattern(&constraints, &unknown, 5).is_none());
    /// assert!(HelperKind::Generic.pattern(&constraints, &unknown, 5).is_some());
    /// ```
    #[must_use]
    pub fn pattern(
        self,
        constraints: &Constraints,
        unknown: &LetterRanks,
        word_length: usize,
    ) -> Option<SearchPattern> {
        match self {
            Self::UnknownLetters => SearchPattern::uniform(unknown.letters(), word_length),
            Self::Positioning => positioning_pattern(constraints, unknown, word_length),
            Self::Generic => Some(SearchPattern::any(word_length)),
        }
    }

    /// Letter weights used to rank this kind's words
    #[must_use]
    pub fn ranks(
        self,
        constraints: &Constraints,
        unknown: &LetterRanks,
        present_weight: u32,
    ) -> LetterRanks {
        match self {
            Self::UnknownLetters | Self::Generic => unknown.clone(),
            Self::Positioning => unknown.with_weight(constraints.present_letters(), present_weight),
        }
    }
}

/// Per position: unclassified and present letters, minus present letters tried there
fn positioning_pattern(
    constraints: &Constraints,
    unknown: &LetterRanks,
    word_length: usize,
) -> Option<SearchPattern> {
    let pool: BTreeSet<char> = unknown
        .letters()
        .chain(constraints.present_letters())
        .collect();

    let pattern = SearchPattern::from_slots(
        (1..=word_length)
            .map(|position| {
                let excluded: BTreeSet<char> = constraints.excluded_at(position).collect();
                Slot::Class(pool.difference(&excluded).copied().collect())
            })
            .collect(),
    );

    pattern.is_satisfiable().then_some(pattern)
}

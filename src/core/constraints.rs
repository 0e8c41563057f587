//! Letter constraints aggregated from a guess history
//!
//! Three independent sets, rebuilt for every request:
//! - `found`: position -> letter (last attempt wins per position)
//! - `present`: letter -> positions it is known to be absent from
//! - `missing`: letters absent from the solution
//!
//! Contradicting histories are kept as-is: a letter may sit in all three sets.

use super::notation::{DecodedAttempt, decode_attempt};
use std::collections::{BTreeMap, BTreeSet};

/// Constraints on the solution derived from annotated attempts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    found: BTreeMap<usize, char>,
    present: BTreeMap<char, BTreeSet<usize>>,
    missing: BTreeSet<char>,
}

impl Constraints {
    /// Decode and fold every attempt, in order
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Constraints;
    ///
    /// let constraints = Constraints::from_attempts(&["Fundi?", "ra?the"]);
    /// assert_eq!(constraints.found_at(1), Some('f'));
    /// assert!(constraints.is_missing('r'));
    /// assert!(constraints.is_present('a'));
    /// ```
    #[must_use]
    pub fn from_attempts<S: AsRef<str>>(attempts: &[S]) -> Self {
        let mut constraints = Self::default();
        for attempt in attempts {
            constraints.absorb(&decode_attempt(attempt.as_ref()));
        }
        constraints
    }

    /// Fold one decoded attempt into the sets
    pub fn absorb(&mut self, decoded: &DecodedAttempt) {
        self.missing.extend(decoded.missing.iter().copied());

        for &(letter, position) in &decoded.present {
            self.present.entry(letter).or_default().insert(position);
        }

        for &(position, letter) in &decoded.found {
            self.found.insert(position, letter);
        }
    }

    #[inline]
    #[must_use]
    pub const fn found(&self) -> &BTreeMap<usize, char> {
        &self.found
    }

    #[inline]
    #[must_use]
    pub const fn present(&self) -> &BTreeMap<char, BTreeSet<usize>> {
        &self.present
    }

    #[inline]
    #[must_use]
    pub const fn missing(&self) -> &BTreeSet<char> {
        &self.missing
    }

    /// Letter fixed at a 1-based position, if any
    #[inline]
    #[must_use]
    pub fn found_at(&self, position: usize) -> Option<char> {
        self.found.get(&position).copied()
    }

    #[inline]
    #[must_use]
    pub fn is_missing(&self, letter: char) -> bool {
        self.missing.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn is_present(&self, letter: char) -> bool {
        self.present.contains_key(&letter)
    }

    /// True if the letter is found somewhere or known present
    #[must_use]
    pub fn is_revealed(&self, letter: char) -> bool {
        self.is_present(letter) || self.found.values().any(|&l| l == letter)
    }

    /// Present letters that are known not to sit at `position`
    pub fn excluded_at(&self, position: usize) -> impl Iterator<Item = char> + '_ {
        self.present
            .iter()
            .filter(move |(_, positions)| positions.contains(&position))
            .map(|(&letter, _)| letter)
    }

    /// Letters known to be present, in alphabetical order
    pub fn present_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.present.keys().copied()
    }
}

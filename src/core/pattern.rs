//! Anchored search patterns
//!
//! A pattern has exactly one slot per letter of the word. Each slot is either
//! a fixed letter or a character class:
//! - `Fixed('f')` renders as `f`
//! - `Class({a, b, c})` renders as `[abc]`
//!
//! The wire form sent to a dictionary is `^` + slots + `$`, e.g. `^f[abc][xyz]$`.

use super::Constraints;
use std::collections::BTreeSet;
use std::fmt;

/// Lowercase latin alphabet
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// One position of a search pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    Fixed(char),
    Class(BTreeSet<char>),
}

impl Slot {
    /// A slot that can never match (empty class)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Class(letters) if letters.is_empty())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(letter) => write!(f, "{letter}"),
            Self::Class(letters) => {
                f.write_str("[")?;
                for letter in letters {
                    write!(f, "{letter}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Start/end-anchored per-position search pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchPattern {
    slots: Vec<Slot>,
}

impl SearchPattern {
    /// Build a pattern from explicit slots
    #[must_use]
    pub const fn from_slots(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// Pattern describing every word consistent with the constraints
    ///
    /// Found positions get their letter; every other position gets the
    /// alphabet minus missing letters minus present letters excluded there.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Constraints, SearchPattern};
    ///
    /// let constraints = Constraints::from_attempts(&["CRANE"]);
    /// let pattern = SearchPattern::for_solutions(&constraints, 5);
    /// assert_eq!(pattern.to_string(), "^crane$");
    /// ```
    #[must_use]
    pub fn for_solutions(constraints: &Constraints, word_length: usize) -> Self {
        let slots = (1..=word_length)
            .map(|position| {
                constraints.found_at(position).map_or_else(
                    || {
                        let excluded: BTreeSet<char> = constraints.excluded_at(position).collect();
                        Slot::Class(
                            ALPHABET
                                .chars()
                                .filter(|c| !constraints.is_missing(*c) && !excluded.contains(c))
                                .collect(),
                        )
                    },
                    Slot::Fixed,
                )
            })
            .collect();

        Self { slots }
    }

    /// Same class at every position, or `None` if there are no letters
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::SearchPattern;
    ///
    /// let pattern = SearchPattern::uniform("ba".chars(), 2).unwrap();
    /// assert_eq!(pattern.to_string(), "^[ab][ab]$");
    /// assert!(SearchPattern::uniform(std::iter::empty(), 5).is_none());
    /// ```
    #[must_use]
    pub fn uniform(letters: impl IntoIterator<Item = char>, word_length: usize) -> Option<Self> {
        let class: BTreeSet<char> = letters.into_iter().collect();
        if class.is_empty() {
            return None;
        }

        Some(Self {
            slots: vec![Slot::Class(class); word_length],
        })
    }

    /// Unconstrained pattern: the full alphabet at every position
    #[must_use]
    pub fn any(word_length: usize) -> Self {
        Self {
            slots: vec![Slot::Class(ALPHABET.chars().collect()); word_length],
        }
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of letters a matching word has
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.slots.len()
    }

    /// False if some position admits no letter at all
    ///
    /// Happens with contradicting attempts; such a pattern matches nothing.
    #[must_use]
    pub fn is_satisfiable(&self) -> bool {
        !self.slots.iter().any(Slot::is_empty)
    }
}

impl fmt::Display for SearchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("^")?;
        for slot in &self.slots {
            write!(f, "{slot}")?;
        }
        f.write_str("$")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_of(pattern: &SearchPattern, position: usize) -> &BTreeSet<char> {
        match &pattern.slots()[position - 1] {
            Slot::Class(letters) => letters,
            Slot::Fixed(letter) => panic!("position {position} is fixed to {letter}"),
        }
    }

    #[test]
    fn all_found_reduces_to_literal() {
        let constraints = Constraints::from_attempts(&["CRANE"]);
        let pattern = SearchPattern::for_solutions(&constraints, 5);

        assert_eq!(pattern.to_string(), "^crane$");
        assert!(pattern.is_satisfiable());
    }

    #[test]
    fn combined_example() {
        let constraints = Constraints::from_attempts(&["Fundi?", "ra?the"]);
        let pattern = SearchPattern::for_solutions(&constraints, 5);

        assert_eq!(pattern.word_length(), 5);
        assert_eq!(pattern.slots()[0], Slot::Fixed('f'));

        for position in 2..=5 {
            let class = class_of(&pattern, position);
            for missing in "rtheund".chars() {
                assert!(!class.contains(&missing));
            }
        }

        assert!(!class_of(&pattern, 2).contains(&'a'));
        assert!(class_of(&pattern, 2).contains(&'i'));
        assert!(!class_of(&pattern, 5).contains(&'i'));
        assert!(class_of(&pattern, 5).contains(&'a'));
        assert!(class_of(&pattern, 3).contains(&'a'));
        assert!(class_of(&pattern, 3).contains(&'i'));
    }

    #[test]
    fn renders_wire_form() {
        let pattern = SearchPattern::from_slots(vec![
            Slot::Fixed('f'),
            Slot::Class(BTreeSet::from(['z', 'a'])),
        ]);

        assert_eq!(pattern.to_string(), "^f[az]$");
    }

    #[test]
    fn any_pattern_is_full_alphabet() {
        let pattern = SearchPattern::any(3);
        let class = format!("[{ALPHABET}]");

        assert_eq!(pattern.to_string(), format!("^{class}{class}{class}$"));
    }

    #[test]
    fn contradiction_makes_pattern_unsatisfiable() {
        // Every letter reported missing leaves no letter for open positions
        let constraints = Constraints::from_attempts(&[
            "abcde", "fghij", "klmno", "pqrst", "uvwxy", "zabcD",
        ]);
        let pattern = SearchPattern::for_solutions(&constraints, 5);

        assert!(!pattern.is_satisfiable());
        assert_eq!(pattern.slots()[4], Slot::Fixed('d'));
    }

    #[test]
    fn empty_word_length_is_just_anchors() {
        assert_eq!(SearchPattern::any(0).to_string(), "^$");
    }
}

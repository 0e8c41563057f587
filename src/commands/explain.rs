//! Offline explanation of a guess history
//!
//! Shows what the engine reads from the attempts without querying a dictionary.

use crate::core::{Constraints, SearchPattern, played_words, validate_attempts};
use crate::error::NotationError;
use std::collections::BTreeSet;

/// Decoded view of a guess history
pub struct Explanation {
    pub attempts: Vec<String>,
    pub constraints: Constraints,
    pub pattern: SearchPattern,
    pub played: BTreeSet<String>,
}

/// Validate and decode attempts into constraints and the solution pattern
///
/// # Errors
///
/// Returns a `NotationError` if any attempt is malformed.
pub fn explain_attempts(
    attempts: &[String],
    word_length: usize,
) -> Result<Explanation, NotationError> {
    validate_attempts(attempts, word_length)?;

    let constraints = Constraints::from_attempts(attempts);
    let pattern = SearchPattern::for_solutions(&constraints, word_length);

    Ok(Explanation {
        attempts: attempts.to_vec(),
        played: played_words(attempts),
        constraints,
        pattern,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempts(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn explains_combined_example() {
        let explanation = explain_attempts(&attempts(&["Fundi?", "ra?the"]), 5).unwrap();

        assert_eq!(explanation.constraints.found_at(1), Some('f'));
        assert!(explanation.pattern.to_string().starts_with("^f["));
        assert_eq!(explanation.played.len(), 2);
        assert!(explanation.played.contains("fundi"));
    }

    #[test]
    fn rejects_malformed_attempts() {
        assert!(matches!(
            explain_attempts(&attempts(&["abcd"]), 5),
            Err(NotationError::WrongLength { .. })
        ));
    }
}

//! Request validation
//!
//! Runs before any lookup: a rejected history never touches the dictionary.

use crate::error::NotationError;

/// Rules shown to the player alongside a formatting error
pub const NOTATION_RULES: &str = "\
Send your attempts separated by spaces, one word per attempt.
Write each letter of an attempt according to the feedback you got:
  - UPPERCASE for letters in the right position (green);
  - a letter followed by `?` for letters present elsewhere in the word (yellow);
  - lowercase for letters not in the word (gray).
Example: `Fundi? ra?the`";

/// Check every attempt against the notation grammar and the word length
///
/// # Errors
///
/// Returns the first `NotationError` found, scanning attempts in order.
///
/// # Examples
/// ```
/// use wordle_helper::core::validate_attempts;
///
/// assert!(validate_attempts(&["Fundi?", "ra?the"], 5).is_ok());
/// assert!(validate_attempts(&["abcd"], 5).is_err());
/// ```
pub fn validate_attempts<S: AsRef<str>>(
    attempts: &[S],
    word_length: usize,
) -> Result<(), NotationError> {
    if attempts.is_empty() {
        return Err(NotationError::NoAttempts);
    }

    for attempt in attempts.iter().map(AsRef::as_ref) {
        validate_attempt(attempt, word_length)?;
    }

    Ok(())
}

fn validate_attempt(attempt: &str, word_length: usize) -> Result<(), NotationError> {
    if attempt.is_empty() {
        return Err(NotationError::EmptyAttempt);
    }

    if let Some(character) = attempt
        .chars()
        .find(|&c| c != '?' && !c.is_ascii_alphabetic())
    {
        return Err(NotationError::IllegalCharacter {
            attempt: attempt.to_string(),
            character,
        });
    }

    if attempt.contains("??") {
        return Err(NotationError::DoubledMarker {
            attempt: attempt.to_string(),
        });
    }

    let letters = attempt.chars().filter(|&c| c != '?').count();
    if letters != word_length {
        return Err(NotationError::WrongLength {
            attempt: attempt.to_string(),
            expected: word_length,
            actual: letters,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_history() {
        assert!(validate_attempts(&["Fundi?", "ra?the", "CRANE"], 5).is_ok());
    }

    #[test]
    fn rejects_short_attempt() {
        assert_eq!(
            validate_attempts(&["abcd"], 5),
            Err(NotationError::WrongLength {
                attempt: "abcd".to_string(),
                expected: 5,
                actual: 4,
            })
        );
    }

    #[test]
    fn markers_do_not_count_towards_length() {
        assert!(validate_attempts(&["a?b?c?d?e?"], 5).is_ok());
        assert!(validate_attempts(&["a?b?c?d?"], 5).is_err());
    }

    #[test]
    fn rejects_doubled_marker() {
        assert!(matches!(
            validate_attempts(&["ab??cde"], 5),
            Err(NotationError::DoubledMarker { .. })
        ));
    }

    #[test]
    fn rejects_illegal_characters() {
        assert!(matches!(
            validate_attempts(&["cran3"], 5),
            Err(NotationError::IllegalCharacter { character: '3', .. })
        ));
        assert!(matches!(
            validate_attempts(&["crané"], 5),
            Err(NotationError::IllegalCharacter { character: 'é', .. })
        ));
    }

    #[test]
    fn rejects_empty_input() {
        let none: [&str; 0] = [];
        assert_eq!(validate_attempts(&none, 5), Err(NotationError::NoAttempts));
        assert_eq!(
            validate_attempts(&["crane", ""], 5),
            Err(NotationError::EmptyAttempt)
        );
    }

    #[test]
    fn honours_word_length() {
        assert!(validate_attempts(&["Planet"], 6).is_ok());
        assert!(validate_attempts(&["Plane"], 6).is_err());
    }
}

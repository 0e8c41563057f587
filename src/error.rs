//! Error types
//!
//! Every failure the pipeline can produce maps onto one of these enums, so the
//! caller always gets something it can turn into a readable reply.

use thiserror::Error;

/// A malformed guess history, rejected before any dictionary lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("Incorrectly formatted input: no attempts given.")]
    NoAttempts,

    #[error("Incorrectly formatted input: attempts must not be empty.")]
    EmptyAttempt,

    #[error(
        "Incorrectly formatted input: make sure all attempts contain {expected} letters \
         (`{attempt}` has {actual})."
    )]
    WrongLength {
        attempt: String,
        expected: usize,
        actual: usize,
    },

    #[error(
        "Put `?` only once after letters that were revealed, \
         but whose position in the word is unknown (`{attempt}`)."
    )]
    DoubledMarker { attempt: String },

    #[error("Use only latin alphabet characters and `?` (`{attempt}` contains `{character}`).")]
    IllegalCharacter { attempt: String, character: char },
}

/// A failed dictionary lookup
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("dictionary lookup timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("dictionary request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("dictionary responded with HTTP {0}")]
    Status(u16),

    #[error("dictionary rejected pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a suggestion request that did not produce suggestions
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error(transparent)]
    BadFormatting(#[from] NotationError),

    #[error("No solution found. Check the attempts for typos or contradicting feedback.")]
    NoSolutionFound,

    #[error("The dictionary could not be reached: {0}")]
    GatewayFailure(LookupError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_length_message_names_attempt() {
        let err = NotationError::WrongLength {
            attempt: "abcd".to_string(),
            expected: 5,
            actual: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("5 letters"));
        assert!(msg.contains("`abcd` has 4"));
    }

    #[test]
    fn bad_formatting_is_transparent() {
        let err = SuggestError::from(NotationError::NoAttempts);
        assert_eq!(err.to_string(), NotationError::NoAttempts.to_string());
    }

    #[test]
    fn gateway_failure_wraps_lookup_error() {
        let err = SuggestError::GatewayFailure(LookupError::Status(503));
        assert!(err.to_string().contains("HTTP 503"));
    }
}

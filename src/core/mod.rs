//! Core domain types for annotated guesses
//!
//! Decoding, validation, constraint aggregation and pattern synthesis.
//! Everything here is pure and synchronous.

mod constraints;
mod notation;
mod pattern;
mod validation;

pub use constraints::Constraints;
pub use notation::{DecodedAttempt, Feedback, Mark, decode_attempt, decode_marks, played_words};
pub use pattern::{ALPHABET, SearchPattern, Slot};
pub use validation::{NOTATION_RULES, validate_attempts};

//! Candidate filtering, ranking and helper word generation
//!
//! `Suggester` drives the whole pipeline against a `Dictionary`.

mod engine;
pub mod filter;
pub mod helpers;
pub mod ranking;

pub use engine::{Suggester, Suggestions};
pub use filter::filter_candidates;
pub use helpers::HelperKind;
pub use ranking::{LetterRanks, RankedWord, has_unique_letters, rank_words, score_word};

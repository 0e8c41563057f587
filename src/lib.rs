//! Wordle Helper
//!
//! Turns a history of annotated guesses into the words that can still be the
//! solution, plus helper words that reveal the most about the letters left.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::{Constraints, SearchPattern};
//!
//! // `F` found at 1, `i` present but not at 5, `a` present but not at 2,
//! // everything else missing
//! let constraints = Constraints::from_attempts(&["Fundi?", "ra?the"]);
//!
//! // Anchored pattern sent to the dictionary
//! let pattern = SearchPattern::for_solutions(&constraints, 5);
//! assert!(pattern.to_string().starts_with("^f["));
//! ```

// Core domain types
pub mod core;

// Candidate ranking and the suggestion pipeline
pub mod solver;

// Dictionary lookups
pub mod dictionary;

// Command implementations
pub mod commands;

// Response text and terminal output
pub mod output;

pub mod config;
pub mod error;

//! Offline dictionary backed by a word list
//!
//! Matches the wire form of a pattern with the `regex` crate, the same string a
//! remote dictionary would receive.

use super::{Dictionary, loader};
use crate::core::SearchPattern;
use crate::error::LookupError;
use async_trait::async_trait;
use regex::Regex;
use std::path::Path;
use tracing::debug;

/// Dictionary that searches an in-memory word list
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    words: Vec<String>,
}

impl WordListDictionary {
    /// Wrap an already loaded word list
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Load a newline-separated word list from disk
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Io` if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LookupError> {
        let words = loader::load_from_file(&path)?;
        debug!(
            path = %path.as_ref().display(),
            count = words.len(),
            "loaded word list"
        );
        Ok(Self::new(words))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[async_trait]
impl Dictionary for WordListDictionary {
    async fn lookup(&self, pattern: &SearchPattern) -> Result<Vec<String>, LookupError> {
        if !pattern.is_satisfiable() {
            return Ok(Vec::new());
        }

        let wire = pattern.to_string();
        let regex = Regex::new(&wire).map_err(|e| LookupError::InvalidPattern {
            pattern: wire.clone(),
            reason: e.to_string(),
        })?;

        Ok(self
            .words
            .iter()
            .filter(|w| regex.is_match(w))
            .cloned()
            .collect())
    }
}

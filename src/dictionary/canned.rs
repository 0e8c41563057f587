//! Canned dictionary
//!
//! Answers lookups from a fixed table keyed by wire pattern and records every
//! request it receives. No network, fully deterministic.

use super::Dictionary;
use crate::core::SearchPattern;
use crate::error::LookupError;
use async_trait::async_trait;
use rustc_hash::FxHashMap;
use std::sync::{Mutex, PoisonError};

/// Dictionary returning preset answers
#[derive(Debug, Default)]
pub struct CannedDictionary {
    responses: FxHashMap<String, Vec<String>>,
    failures: FxHashMap<String, u16>,
    fallback: Vec<String>,
    requests: Mutex<Vec<String>>,
}

impl CannedDictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `pattern` (wire form) with `words`
    #[must_use]
    pub fn with_response(mut self, pattern: impl Into<String>, words: &[&str]) -> Self {
        self.responses
            .insert(pattern.into(), words.iter().map(ToString::to_string).collect());
        self
    }

    /// Fail lookups of `pattern` with the given HTTP status
    #[must_use]
    pub fn with_failure(mut self, pattern: impl Into<String>, status: u16) -> Self {
        self.failures.insert(pattern.into(), status);
        self
    }

    /// Answer every unknown pattern with `words`
    #[must_use]
    pub fn with_fallback(mut self, words: &[&str]) -> Self {
        self.fallback = words.iter().map(ToString::to_string).collect();
        self
    }

    /// Wire patterns received so far, in arrival order
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Dictionary for CannedDictionary {
    async fn lookup(&self, pattern: &SearchPattern) -> Result<Vec<String>, LookupError> {
        let wire = pattern.to_string();
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(wire.clone());

        if let Some(&status) = self.failures.get(&wire) {
            return Err(LookupError::Status(status));
        }

        Ok(self
            .responses
            .get(&wire)
            .unwrap_or(&self.fallback)
            .clone())
    }
}

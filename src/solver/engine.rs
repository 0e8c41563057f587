//! Suggestion pipeline
//!
//! decode -> aggregate -> synthesize -> main lookup -> filter/rank -> helper lookups
//!
//! The main lookup gates everything else. The three helper lookups only need
//! the unknown-letter ranks and run concurrently.

use super::filter::filter_candidates;
use super::helpers::HelperKind;
use super::ranking::{LetterRanks, RankedWord, rank_words};
use crate::config::SuggestConfig;
use crate::core::{Constraints, SearchPattern, validate_attempts};
use crate::dictionary::Dictionary;
use crate::error::{LookupError, SuggestError};
use tracing::{debug, info, warn};

/// Everything a response is assembled from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    pub constraints: Constraints,
    pub pattern: SearchPattern,
    pub possible_solutions: Vec<RankedWord>,
    pub unknown_letter_helpers: Vec<RankedWord>,
    pub positioning_helpers: Vec<RankedWord>,
    pub generic_helpers: Vec<RankedWord>,
}

impl Suggestions {
    /// Helper words of one kind
    #[must_use]
    pub fn helpers(&self, kind: HelperKind) -> &[RankedWord] {
        match kind {
            HelperKind::UnknownLetters => &self.unknown_letter_helpers,
            HelperKind::Positioning => &self.positioning_helpers,
            HelperKind::Generic => &self.generic_helpers,
        }
    }
}

/// Main suggestion engine
///
/// Holds only configuration and the dictionary. Constraints are rebuilt from
/// the attempts on every call, so one instance can serve concurrent requests.
pub struct Suggester<D: Dictionary> {
    dictionary: D,
    config: SuggestConfig,
}

impl<D: Dictionary> Suggester<D> {
    pub const fn new(dictionary: D, config: SuggestConfig) -> Self {
        Self { dictionary, config }
    }

    #[must_use]
    pub const fn config(&self) -> &SuggestConfig {
        &self.config
    }

    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Turn a guess history into possible solutions and helper words
    ///
    /// # Errors
    ///
    /// - `BadFormatting` if an attempt breaks the notation; no lookup is made
    /// - `GatewayFailure` if the main lookup fails or times out
    /// - `NoSolutionFound` if no word survives the main lookup and filter;
    ///   helper lookups are skipped
    ///
    /// A failed helper lookup only empties its own section.
    pub async fn suggest<S: AsRef<str>>(
        &self,
        attempts: &[S],
    ) -> Result<Suggestions, SuggestError> {
        let word_length = self.config.word_length;
        validate_attempts(attempts, word_length)?;

        let constraints = Constraints::from_attempts(attempts);
        let pattern = SearchPattern::for_solutions(&constraints, word_length);
        info!(attempts = attempts.len(), %pattern, "processing suggestion request");

        let words = if pattern.is_satisfiable() {
            self.lookup(&pattern)
                .await
                .map_err(SuggestError::GatewayFailure)?
        } else {
            debug!("solution pattern has an empty position, skipping lookup");
            Vec::new()
        };

        let candidates = filter_candidates(words, &constraints);
        if candidates.is_empty() {
            return Err(SuggestError::NoSolutionFound);
        }
        debug!(candidates = candidates.len(), "candidates after filtering");

        let unknown = LetterRanks::unknown(&candidates, &constraints);
        let possible_solutions =
            rank_words(candidates, &unknown, self.config.unique_letter_bonus);

        let (unknown_letter_helpers, positioning_helpers, generic_helpers) = tokio::join!(
            self.helper_words(HelperKind::UnknownLetters, &constraints, &unknown),
            self.helper_words(HelperKind::Positioning, &constraints, &unknown),
            self.helper_words(HelperKind::Generic, &constraints, &unknown),
        );

        Ok(Suggestions {
            constraints,
            pattern,
            possible_solutions,
            unknown_letter_helpers,
            positioning_helpers,
            generic_helpers,
        })
    }

    /// Ranked helper words of one kind; failures degrade to an empty list
    async fn helper_words(
        &self,
        kind: HelperKind,
        constraints: &Constraints,
        unknown: &LetterRanks,
    ) -> Vec<RankedWord> {
        let Some(pattern) = kind.pattern(constraints, unknown, self.config.word_length) else {
            debug!(?kind, "no letters to build a helper pattern from");
            return Vec::new();
        };

        match self.lookup(&pattern).await {
            Ok(words) => {
                let ranks = kind.ranks(constraints, unknown, self.config.present_letter_weight);
                rank_words(words, &ranks, self.config.unique_letter_bonus)
            }
            Err(e) => {
                warn!(?kind, %pattern, error = %e, "helper lookup failed, leaving section empty");
                Vec::new()
            }
        }
    }

    async fn lookup(&self, pattern: &SearchPattern) -> Result<Vec<String>, LookupError> {
        let timeout = self.config.lookup_timeout;
        let words = tokio::time::timeout(timeout, self.dictionary.lookup(pattern))
            .await
            .map_err(|_| LookupError::Timeout(timeout))??;

        debug!(%pattern, count = words.len(), "lookup returned");
        Ok(words)
    }
}

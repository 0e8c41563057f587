//! Letter-frequency ranking of words
//!
//! Letters nobody has classified yet are worth probing; the more candidates
//! share a letter, the more a guess containing it splits them. A word's score
//! is the sum of its letters' weights, plus a flat bonus when no letter repeats.

use crate::core::Constraints;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// A suggestion word with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    pub word: String,
    pub score: u32,
}

/// Per-letter weights, kept in descending weight order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterRanks {
    ranked: Vec<(char, u32)>,
    weights: FxHashMap<char, u32>,
}

impl LetterRanks {
    /// Build from arbitrary (letter, weight) pairs; later pairs override earlier ones
    #[must_use]
    pub fn from_weights(pairs: impl IntoIterator<Item = (char, u32)>) -> Self {
        let weights: FxHashMap<char, u32> = pairs.into_iter().collect();

        let mut ranked: Vec<(char, u32)> = weights.iter().map(|(&c, &w)| (c, w)).collect();
        ranked.sort_unstable_by(|(c1, w1), (c2, w2)| w2.cmp(w1).then(c1.cmp(c2)));

        Self { ranked, weights }
    }

    /// Tally letters of the candidates that are neither found nor present
    ///
    /// Each occurrence counts, so a letter appearing twice in one word counts twice.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Constraints;
    /// use wordle_helper::solver::LetterRanks;
    ///
    /// let constraints = Constraints::from_attempts(&["Fundi?", "ra?the"]);
    /// let candidates = vec!["flail".to_string(), "folia".to_string()];
    /// let ranks = LetterRanks::unknown(&candidates, &constraints);
    ///
    /// assert_eq!(ranks.letters().collect::<String>(), "lo");
    /// assert_eq!(ranks.weight('l'), 3);
    /// ```
    #[must_use]
    pub fn unknown(candidates: &[String], constraints: &Constraints) -> Self {
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();

        for letter in candidates.iter().flat_map(|w| w.chars()) {
            if !constraints.is_revealed(letter) {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }

        Self::from_weights(counts)
    }

    /// These ranks, with `weight` added for `letters` the ranks do not already cover
    #[must_use]
    pub fn with_weight(&self, letters: impl IntoIterator<Item = char>, weight: u32) -> Self {
        let base = letters.into_iter().map(|c| (c, weight));
        Self::from_weights(base.chain(self.ranked.iter().copied()))
    }

    /// Weight of a letter, 0 if unranked
    #[inline]
    #[must_use]
    pub fn weight(&self, letter: char) -> u32 {
        self.weights.get(&letter).copied().unwrap_or(0)
    }

    /// Letters from most to least informative
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.ranked.iter().map(|&(c, _)| c)
    }

    /// (letter, weight) pairs from most to least informative
    #[must_use]
    pub fn ranked(&self) -> &[(char, u32)] {
        &self.ranked
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }
}

/// True if no letter occurs twice
#[must_use]
pub fn has_unique_letters(word: &str) -> bool {
    let mut seen = FxHashSet::default();
    word.chars().all(|c| seen.insert(c))
}

/// Score a word: sum of letter weights, plus `unique_bonus` if no letter repeats
///
/// # Examples
/// ```
/// use wordle_helper::solver::{LetterRanks, score_word};
///
/// let ranks = LetterRanks::from_weights([('l', 3), ('o', 1)]);
/// assert_eq!(score_word("folia", &ranks, 1000), 1004);
/// assert_eq!(score_word("flail", &ranks, 1000), 6);
/// ```
#[must_use]
pub fn score_word(word: &str, ranks: &LetterRanks, unique_bonus: u32) -> u32 {
    let letters: u32 = word.chars().map(|c| ranks.weight(c)).sum();
    if has_unique_letters(word) {
        letters + unique_bonus
    } else {
        letters
    }
}

/// Score and sort words by descending score
///
/// Duplicate words are dropped (first occurrence kept). The sort is stable, so
/// words with equal scores stay in input order; callers must not rely on that
/// order beyond a single run.
#[must_use]
pub fn rank_words(words: Vec<String>, ranks: &LetterRanks, unique_bonus: u32) -> Vec<RankedWord> {
    let mut seen = FxHashSet::default();
    let words: Vec<String> = words
        .into_iter()
        .filter(|w| seen.insert(w.clone()))
        .collect();

    // Blocks the calling thread until rayon is done. Gateway results are a few
    // thousand words at most, short enough to stay on an async worker.
    let mut ranked: Vec<RankedWord> = words
        .into_par_iter()
        .map(|word| {
            let score = score_word(&word, ranks, unique_bonus);
            RankedWord { word, score }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn unknown_excludes_found_and_present() {
        let constraints = Constraints::from_attempts(&["Fundi?", "ra?the"]);
        let ranks = LetterRanks::unknown(&words(&["flail", "folia"]), &constraints);

        assert_eq!(ranks.ranked(), &[('l', 3), ('o', 1)]);
        assert_eq!(ranks.weight('f'), 0);
        assert_eq!(ranks.weight('a'), 0);
        assert_eq!(ranks.weight('i'), 0);
    }

    #[test]
    fn unknown_ties_ordered_by_letter() {
        let constraints = Constraints::default();
        let ranks = LetterRanks::unknown(&words(&["cab"]), &constraints);

        assert_eq!(ranks.letters().collect::<String>(), "abc");
    }

    #[test]
    fn unknown_empty_when_everything_is_revealed() {
        let constraints = Constraints::from_attempts(&["CRANE"]);
        let ranks = LetterRanks::unknown(&words(&["crane"]), &constraints);

        assert!(ranks.is_empty());
        assert_eq!(ranks.len(), 0);
    }

    #[test]
    fn with_weight_keeps_existing_ranks() {
        let ranks = LetterRanks::from_weights([('l', 3), ('o', 1)]);
        let merged = ranks.with_weight(['a', 'i', 'l'], 1000);

        assert_eq!(merged.weight('a'), 1000);
        assert_eq!(merged.weight('i'), 1000);
        assert_eq!(merged.weight('l'), 3);
        assert_eq!(merged.letters().collect::<String>(), "ailo");
    }

    #[test]
    fn unique_letters() {
        assert!(has_unique_letters("crane"));
        assert!(!has_unique_letters("speed"));
        assert!(has_unique_letters(""));
    }

    #[test]
    fn score_without_ranks_is_bonus_only() {
        let ranks = LetterRanks::default();
        assert_eq!(score_word("crane", &ranks, 1000), 1000);
        assert_eq!(score_word("speed", &ranks, 1000), 0);
    }

    #[test]
    fn score_counts_repeated_letters() {
        let ranks = LetterRanks::from_weights([('e', 2)]);
        assert_eq!(score_word("speed", &ranks, 1000), 4);
    }

    #[test]
    fn rank_sorts_descending() {
        let ranks = LetterRanks::from_weights([('l', 3), ('o', 1)]);
        let ranked = rank_words(words(&["flail", "folia", "crane"]), &ranks, 1000);

        let order: Vec<(&str, u32)> = ranked.iter().map(|r| (r.word.as_str(), r.score)).collect();
        assert_eq!(order, vec![("folia", 1004), ("crane", 1000), ("flail", 6)]);
    }

    #[test]
    fn rank_drops_duplicates() {
        let ranked = rank_words(words(&["crane", "crane"]), &LetterRanks::default(), 1000);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn rank_is_repeatable() {
        let ranks = LetterRanks::from_weights([('a', 1)]);
        let input = words(&["bbbbb", "ccccc", "abcde", "edcba"]);

        assert_eq!(
            rank_words(input.clone(), &ranks, 1000),
            rank_words(input, &ranks, 1000)
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn rank_from_concurrent_runtime_tasks() {
        let ranks = LetterRanks::from_weights([('l', 3), ('o', 1)]);
        let expected = rank_words(words(&["flail", "folia", "crane"]), &ranks, 1000);

        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..4 {
            let ranks = ranks.clone();
            tasks.spawn(async move { rank_words(words(&["flail", "folia", "crane"]), &ranks, 1000) });
        }

        while let Some(ranked) = tasks.join_next().await {
            assert_eq!(ranked.unwrap(), expected);
        }
    }
}

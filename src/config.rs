//! Runtime configuration

use crate::dictionary::DEFAULT_DICTIONARY_URL;
use std::path::PathBuf;
use std::time::Duration;

/// Tuning knobs of the suggestion pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestConfig {
    /// Letters per word
    pub word_length: usize,
    /// Words shown per response section
    pub display_limit: usize,
    /// Score bonus for words without repeated letters
    pub unique_letter_bonus: u32,
    /// Letter weight given to known-present letters when ranking positioning helpers
    pub present_letter_weight: u32,
    /// Upper bound on a single dictionary lookup
    pub lookup_timeout: Duration,
}

impl SuggestConfig {
    #[must_use]
    pub const fn new(word_length: usize) -> Self {
        Self {
            word_length,
            display_limit: 10,
            unique_letter_bonus: 1000,
            present_letter_weight: 1000,
            lookup_timeout: Duration::from_secs(10),
        }
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Where words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryConfig {
    /// Regex dictionary search page at this URL
    Remote { url: String },
    /// Newline-separated word list file
    WordList { path: PathBuf },
}

impl DictionaryConfig {
    /// Interpret the `--dictionary` argument
    ///
    /// `remote` selects the search page at `url`; anything else is a word list path.
    #[must_use]
    pub fn from_arg(arg: &str, url: Option<&str>) -> Self {
        match arg {
            "remote" => Self::Remote {
                url: url.unwrap_or(DEFAULT_DICTIONARY_URL).to_string(),
            },
            path => Self::WordList {
                path: PathBuf::from(path),
            },
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self::Remote {
            url: DEFAULT_DICTIONARY_URL.to_string(),
        }
    }
}

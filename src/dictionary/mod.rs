//! Dictionary lookups
//!
//! The engine only needs one capability from a dictionary: turn an anchored
//! search pattern into the list of words matching it.

mod canned;
pub mod loader;
mod local;
mod remote;

pub use canned::CannedDictionary;
pub use local::WordListDictionary;
pub use remote::{DEFAULT_DICTIONARY_URL, RemoteDictionary, extract_words};

use crate::config::DictionaryConfig;
use crate::core::SearchPattern;
use crate::error::LookupError;
use async_trait::async_trait;
use std::time::Duration;

/// A source of words matching a search pattern
///
/// Implementations return lowercase words of the pattern's length, possibly
/// none. Failures are reported, never swallowed; the caller decides whether
/// a failed lookup is fatal.
#[async_trait]
pub trait Dictionary: Send + Sync {
    async fn lookup(&self, pattern: &SearchPattern) -> Result<Vec<String>, LookupError>;
}

/// Enum wrapper for the dictionaries selectable at runtime
///
/// Allows runtime selection while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum DictionarySource {
    /// HTTP regex dictionary (default)
    Remote(RemoteDictionary),
    /// Local word list file
    Local(WordListDictionary),
}

impl DictionarySource {
    /// Open the configured dictionary
    ///
    /// # Errors
    ///
    /// Returns an error if the word list cannot be read or the HTTP client
    /// cannot be built.
    pub fn open(config: &DictionaryConfig, timeout: Duration) -> Result<Self, LookupError> {
        match config {
            DictionaryConfig::Remote { url } => Ok(Self::Remote(RemoteDictionary::new(
                url.clone(),
                timeout,
            )?)),
            DictionaryConfig::WordList { path } => {
                Ok(Self::Local(WordListDictionary::from_file(path)?))
            }
        }
    }
}

#[async_trait]
impl Dictionary for DictionarySource {
    async fn lookup(&self, pattern: &SearchPattern) -> Result<Vec<String>, LookupError> {
        match self {
            Self::Remote(d) => d.lookup(pattern).await,
            Self::Local(d) => d.lookup(pattern).await,
        }
    }
}

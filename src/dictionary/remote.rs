//! Remote regex dictionary
//!
//! Sends the wire pattern to an HTML regex-dictionary search page and scrapes
//! the result links. Each match is rendered as a link to its dictionary entry;
//! the link text is the word.

use super::Dictionary;
use crate::core::SearchPattern;
use crate::error::LookupError;
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Default search endpoint
pub const DEFAULT_DICTIONARY_URL: &str = "https://www.visca.com/regexdict/";

static ENTRY_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\s[^>]*href\s*=\s*["'][^"']*yourdictionary\.com/[^"']*["'][^>]*>([^<]+)</a>"#)
        .expect("entry link regex is valid")
});

/// HTTP-backed regex dictionary
#[derive(Debug, Clone)]
pub struct RemoteDictionary {
    client: Client,
    base_url: String,
}

impl RemoteDictionary {
    /// Create a client for the given search page
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Dictionary for RemoteDictionary {
    async fn lookup(&self, pattern: &SearchPattern) -> Result<Vec<String>, LookupError> {
        let wire = pattern.to_string();
        debug!(url = %self.base_url, pattern = %wire, "querying remote dictionary");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("str", wire.as_str()),
                ("fstr", ""),
                ("ifun", "if"),
                ("ccg", "all"),
                ("search", "Search"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let html = response.text().await?;
        Ok(extract_words(&html, pattern.word_length()))
    }
}

/// Pull the words out of a result page
///
/// Only link texts made of ASCII letters with the expected length are kept,
/// lowercased, in page order.
#[must_use]
pub fn extract_words(html: &str, word_length: usize) -> Vec<String> {
    ENTRY_LINK
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|w| w.len() == word_length && w.chars().all(|c| c.is_ascii_alphabetic()))
        .map(str::to_ascii_lowercase)
        .collect()
}

//! Suggestion command
//!
//! Runs the pipeline and turns every outcome into text a player can read.

use crate::core::NOTATION_RULES;
use crate::dictionary::Dictionary;
use crate::error::SuggestError;
use crate::output::render_response;
use crate::solver::Suggester;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::debug;

/// Suggestions for a guess history, or a readable explanation of why there are none
pub async fn reply_to<D: Dictionary, S: AsRef<str>>(
    suggester: &Suggester<D>,
    attempts: &[S],
) -> String {
    match suggester.suggest(attempts).await {
        Ok(suggestions) => {
            let response = render_response(&suggestions, suggester.config().display_limit);
            debug!(%response, "generated response");
            response
        }
        Err(SuggestError::BadFormatting(e)) => format!("{e}\n\n{NOTATION_RULES}"),
        Err(e) => e.to_string(),
    }
}

/// `reply_to` with a spinner on stderr while the dictionary is queried
pub async fn run_suggest<D: Dictionary>(suggester: &Suggester<D>, attempts: &[String]) -> String {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Searching the dictionary...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let reply = reply_to(suggester, attempts).await;

    spinner.finish_and_clear();
    reply
}

//! Wordle Helper - CLI
//!
//! Suggests possible solutions and helper words from annotated guesses.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wordle_helper::{
    commands::{explain_attempts, run_batch, run_suggest},
    config::{DictionaryConfig, SuggestConfig},
    core::NOTATION_RULES,
    dictionary::DictionarySource,
    output::{print_explanation, print_reply},
    solver::Suggester,
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Suggests Wordle solutions and helper words from annotated guesses",
    version,
    author,
    after_help = after_help()
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Attempts in annotated notation, e.g. `Fundi? ra?the` (same as `suggest`)
    attempts: Vec<String>,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value = "5", value_parser = parse_word_length)]
    word_length: usize,

    /// Words shown per section
    #[arg(short = 'n', long, global = true, default_value = "10")]
    limit: usize,

    /// Dictionary: 'remote' (default, regex dictionary website) or path to a word list
    #[arg(short = 'd', long, global = true, default_value = "remote")]
    dictionary: String,

    /// Search page used by the remote dictionary
    #[arg(long, global = true, env = "WORDLE_DICTIONARY_URL")]
    dictionary_url: Option<String>,

    /// Seconds to wait for a single dictionary lookup
    #[arg(short, long, global = true, default_value = "10", env = "WORDLE_LOOKUP_TIMEOUT")]
    timeout: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest possible solutions and helper words
    Suggest {
        /// Attempts in annotated notation
        #[arg(required = true)]
        attempts: Vec<String>,
    },

    /// Show the constraints and search pattern read from the attempts (no lookups)
    Explain {
        /// Attempts in annotated notation
        #[arg(required = true)]
        attempts: Vec<String>,
    },

    /// Answer one request per stdin line with a pool of workers
    Batch {
        /// Number of requests handled concurrently
        #[arg(short, long, default_value = "2", value_parser = clap::value_parser!(u16).range(1..))]
        workers: u16,
    },
}

fn after_help() -> String {
    format!(
        "{NOTATION_RULES}\n\n\
         An attempt spelled like a subcommand (`batch`, `explain`, `suggest`) needs an\n\
         explicit `suggest` in front of it, e.g. `wordle_helper suggest batch`."
    )
}

fn parse_word_length(s: &str) -> Result<usize, String> {
    let length: usize = s.parse().map_err(|e| format!("{e}"))?;
    if (1..=32).contains(&length) {
        Ok(length)
    } else {
        Err(format!("word length must be between 1 and 32, got {length}"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "wordle_helper=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = SuggestConfig {
        display_limit: cli.limit,
        lookup_timeout: Duration::from_secs(cli.timeout),
        ..SuggestConfig::new(cli.word_length)
    };

    match cli.command {
        Some(Commands::Explain { attempts }) => run_explain_command(&attempts, &config),
        Some(Commands::Batch { workers }) => {
            let suggester = open_suggester(&cli.dictionary, cli.dictionary_url.as_deref(), config)?;
            run_batch_command(suggester, usize::from(workers)).await
        }
        Some(Commands::Suggest { attempts }) => {
            let suggester = open_suggester(&cli.dictionary, cli.dictionary_url.as_deref(), config)?;
            run_suggest_command(&suggester, &attempts).await
        }
        None if cli.attempts.is_empty() => {
            println!("{NOTATION_RULES}");
            Ok(())
        }
        None => {
            let suggester = open_suggester(&cli.dictionary, cli.dictionary_url.as_deref(), config)?;
            run_suggest_command(&suggester, &cli.attempts).await
        }
    }
}

fn open_suggester(
    dictionary: &str,
    url: Option<&str>,
    config: SuggestConfig,
) -> Result<Suggester<DictionarySource>> {
    let dictionary_config = DictionaryConfig::from_arg(dictionary, url);
    let source = DictionarySource::open(&dictionary_config, config.lookup_timeout)
        .with_context(|| format!("failed to open dictionary {dictionary_config:?}"))?;

    Ok(Suggester::new(source, config))
}

async fn run_suggest_command(
    suggester: &Suggester<DictionarySource>,
    attempts: &[String],
) -> Result<()> {
    let reply = run_suggest(suggester, attempts).await;
    print_reply(&reply);
    Ok(())
}

fn run_explain_command(attempts: &[String], config: &SuggestConfig) -> Result<()> {
    match explain_attempts(attempts, config.word_length) {
        Ok(explanation) => print_explanation(&explanation),
        Err(e) => print_reply(&format!("{e}\n\n{NOTATION_RULES}")),
    }
    Ok(())
}

async fn run_batch_command(suggester: Suggester<DictionarySource>, workers: usize) -> Result<()> {
    let input = tokio::io::BufReader::new(tokio::io::stdin());

    let handled = run_batch(Arc::new(suggester), input, workers, |reply| {
        println!("#{}\n{}\n", reply.index, reply.text);
    })
    .await
    .context("failed to read requests from stdin")?;

    tracing::info!(handled, "batch finished");
    Ok(())
}

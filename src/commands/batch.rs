//! Batch mode: a bounded worker pool over line-delimited requests
//!
//! A producer reads one request per line (attempts separated by whitespace)
//! into a bounded queue. A fixed number of workers consume it; every request
//! runs in its own task, so a request that panics is logged and answered with
//! a generic failure while its worker carries on with the next one.

use super::suggest::reply_to;
use crate::dictionary::Dictionary;
use crate::solver::Suggester;
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, error, info};

/// Reply sent when handling a request failed unexpectedly
pub const FAILED_REPLY: &str = "Something went wrong while handling these attempts. Please try again.";

/// One request read from the input
#[derive(Debug)]
struct BatchRequest {
    index: usize,
    attempts: Vec<String>,
}

/// Reply to the `index`-th request (1-based, blank lines not counted)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReply {
    pub index: usize,
    pub text: String,
}

type RequestQueue = Arc<Mutex<mpsc::Receiver<BatchRequest>>>;

/// Answer every request in `input` with a pool of `workers` tasks
///
/// Replies are handed to `on_reply` in completion order. Returns the number
/// of requests read.
///
/// # Errors
///
/// Returns an I/O error if reading the input fails; requests already queued
/// are still answered.
pub async fn run_batch<D, R, F>(
    suggester: Arc<Suggester<D>>,
    input: R,
    workers: usize,
    mut on_reply: F,
) -> io::Result<usize>
where
    D: Dictionary + 'static,
    R: AsyncBufRead + Unpin,
    F: FnMut(BatchReply),
{
    let workers = workers.max(1);
    let capacity = workers.saturating_mul(2);
    let (request_tx, request_rx) = mpsc::channel::<BatchRequest>(capacity);
    let (reply_tx, mut reply_rx) = mpsc::channel::<BatchReply>(capacity);
    let queue: RequestQueue = Arc::new(Mutex::new(request_rx));

    let mut pool = JoinSet::new();
    for id in 0..workers {
        pool.spawn(worker(
            id,
            Arc::clone(&suggester),
            Arc::clone(&queue),
            reply_tx.clone(),
        ));
    }
    drop(reply_tx);
    info!(workers, "batch worker pool started");

    let producer = async move {
        let mut lines = input.lines();
        let mut index = 0;

        while let Some(line) = lines.next_line().await? {
            let attempts: Vec<String> = line.split_whitespace().map(ToString::to_string).collect();
            if attempts.is_empty() {
                continue;
            }
            index += 1;
            debug!(request = index, "queued request");

            if request_tx.send(BatchRequest { index, attempts }).await.is_err() {
                break;
            }
        }

        Ok::<usize, io::Error>(index)
    };

    let consumer = async {
        while let Some(reply) = reply_rx.recv().await {
            on_reply(reply);
        }
    };

    let (read, ()) = tokio::join!(producer, consumer);

    while let Some(joined) = pool.join_next().await {
        if let Err(e) = joined {
            error!(error = %e, "batch worker terminated abnormally");
        }
    }
    info!("batch worker pool stopped");

    read
}

async fn worker<D: Dictionary + 'static>(
    id: usize,
    suggester: Arc<Suggester<D>>,
    queue: RequestQueue,
    replies: mpsc::Sender<BatchReply>,
) {
    loop {
        let request = queue.lock().await.recv().await;
        let Some(BatchRequest { index, attempts }) = request else {
            break;
        };

        let task_suggester = Arc::clone(&suggester);
        let task = tokio::spawn(async move { reply_to(&task_suggester, &attempts).await });

        let text = match task.await {
            Ok(text) => text,
            Err(e) => {
                error!(
                    worker = id,
                    request = index,
                    error = %e,
                    "request handling failed, the worker is kept alive"
                );
                FAILED_REPLY.to_string()
            }
        };

        if replies.send(BatchReply { index, text }).await.is_err() {
            break;
        }
    }

    debug!(worker = id, "worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SuggestConfig;
    use crate::core::SearchPattern;
    use crate::dictionary::CannedDictionary;
    use crate::error::LookupError;
    use async_trait::async_trait;

    /// Panics on one pattern, answers everything else from a canned table
    struct FlakyDictionary {
        poisoned: String,
        inner: CannedDictionary,
    }

    #[async_trait]
    impl Dictionary for FlakyDictionary {
        async fn lookup(&self, pattern: &SearchPattern) -> Result<Vec<String>, LookupError> {
            assert_ne!(pattern.to_string(), self.poisoned, "dictionary blew up");
            self.inner.lookup(pattern).await
        }
    }

    async fn collect(
        suggester: Suggester<impl Dictionary + 'static>,
        input: &'static str,
        workers: usize,
    ) -> (usize, Vec<BatchReply>) {
        let mut replies = Vec::new();
        let read = run_batch(Arc::new(suggester), input.as_bytes(), workers, |r| {
            replies.push(r);
        })
        .await
        .unwrap();

        replies.sort_by_key(|r| r.index);
        (read, replies)
    }

    #[tokio::test]
    async fn answers_every_request() {
        let dictionary = CannedDictionary::new()
            .with_response("^crane$", &["crane"])
            .with_response("^slate$", &["slate"]);
        let suggester = Suggester::new(dictionary, SuggestConfig::default());

        let (read, replies) = collect(suggester, "CRANE\n\nSLATE\nabcd\n", 3).await;

        assert_eq!(read, 3);
        assert_eq!(replies.len(), 3);
        assert!(replies[0].text.starts_with("Possible solutions:\n\ncrane"));
        assert!(replies[1].text.starts_with("Possible solutions:\n\nslate"));
        assert!(replies[2].text.contains("5 letters"));
    }

    #[tokio::test]
    async fn failing_request_does_not_stop_the_pool() {
        let dictionary = FlakyDictionary {
            poisoned: "^crane$".to_string(),
            inner: CannedDictionary::new().with_response("^slate$", &["slate"]),
        };
        let suggester = Suggester::new(dictionary, SuggestConfig::default());

        let (read, replies) = collect(suggester, "CRANE\nSLATE\n", 1).await;

        assert_eq!(read, 2);
        assert_eq!(
            replies[0],
            BatchReply {
                index: 1,
                text: FAILED_REPLY.to_string()
            }
        );
        assert!(replies[1].text.starts_with("Possible solutions:\n\nslate"));
    }

    #[tokio::test]
    async fn empty_input_reads_nothing() {
        let suggester = Suggester::new(CannedDictionary::new(), SuggestConfig::default());

        let (read, replies) = collect(suggester, "\n  \n", 2).await;

        assert_eq!(read, 0);
        assert!(replies.is_empty());
    }

    #[tokio::test]
    async fn zero_workers_still_makes_progress() {
        let dictionary = CannedDictionary::new().with_response("^crane$", &["crane"]);
        let suggester = Suggester::new(dictionary, SuggestConfig::default());

        let (read, replies) = collect(suggester, "CRANE\n", 0).await;

        assert_eq!(read, 1);
        assert_eq!(replies.len(), 1);
    }
}

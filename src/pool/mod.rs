// src/pool/mod.rs
// =============================================================================
// The bounded-concurrency fetch engine.
//
// How it works:
// 1. A dispatch task pushes every (normalized) URL into a bounded work channel,
//    then drops its sender, which closes the channel
// 2. A fixed number of workers pull URLs from that channel, fetch and checksum
//    them, and push one FetchResult each onto the result channel
// 3. A watcher task waits for every worker to finish and then drops the last
//    result sender, which ends the result stream
//
// The caller gets the result stream straight away and sees each result as soon
// as it's ready, in completion order (not input order).
//
// Failures of individual URLs are just results. The only error the pool itself
// can return is a bad configuration, and that happens in build(), not run().
// =============================================================================

mod result;
mod worker;

pub use result::FetchResult;

use futures::future::join_all;
use futures::StreamExt;
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, Mutex};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, error};

use crate::fetcher::{normalize_url, ClientConfig, Fetcher};
use worker::{worker_task, WorkQueue};

/// Upper bound on workers when the caller doesn't choose a concurrency.
pub const DEFAULT_PARALLELISM: usize = 10;

/// Stream of results, one per URL, ending after the last one.
pub type ResultStream = ReceiverStream<FetchResult>;

/// Problems with the pool configuration, reported by [`PoolBuilder::build`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("concurrency must be at least 1")]
    InvalidConcurrency,

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Collects the pool options. Everything except the URL list has a default.
#[derive(Debug)]
pub struct PoolBuilder {
    urls: Vec<String>,
    concurrency: Option<usize>,
    client: Option<Client>,
    client_config: ClientConfig,
}

impl PoolBuilder {
    /// Maximum number of fetches in flight (default: 10).
    ///
    /// The pool never starts more workers than there are URLs.
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    /// Use this client instead of building one. Overrides `client_config`.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Timeouts for the client built when none is supplied.
    pub fn client_config(mut self, config: ClientConfig) -> Self {
        self.client_config = config;
        self
    }

    pub fn build(self) -> Result<Pool, ConfigError> {
        let concurrency = self.concurrency.unwrap_or(DEFAULT_PARALLELISM);
        if concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency);
        }

        let client = match self.client {
            Some(client) => client,
            None => self.client_config.build_client()?,
        };

        Ok(Pool {
            workers: concurrency.min(self.urls.len()),
            urls: self.urls,
            fetcher: Fetcher::new(client),
        })
    }
}

/// A batch of URLs ready to be fetched with a bounded number of workers.
#[derive(Debug)]
pub struct Pool {
    urls: Vec<String>,
    workers: usize,
    fetcher: Fetcher,
}

impl Pool {
    pub fn builder<I, S>(urls: I) -> PoolBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PoolBuilder {
            urls: urls.into_iter().map(Into::into).collect(),
            concurrency: None,
            client: None,
            client_config: ClientConfig::default(),
        }
    }

    /// Pool with default concurrency and a default client.
    pub fn new<I, S>(urls: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder(urls).build()
    }

    /// Number of workers `run` will start: the configured concurrency capped
    /// at the number of URLs.
    pub fn effective_concurrency(&self) -> usize {
        self.workers
    }

    /// Starts fetching and returns the result stream immediately.
    ///
    /// Results are keyed by the normalized URL, so `example.com` comes back as
    /// `https://example.com`. Must be called from within a tokio runtime.
    pub fn run(self) -> ResultStream {
        let workers = self.workers;
        let (result_tx, result_rx) = mpsc::channel(workers.max(1));

        if workers == 0 {
            // Dropping the only sender leaves an empty, already-closed stream
            debug!("no URLs to fetch");
            drop(result_tx);
            return ReceiverStream::new(result_rx);
        }

        let (work_tx, work_rx) = mpsc::channel::<String>(workers);
        let queue: WorkQueue = Arc::new(Mutex::new(work_rx));

        debug!(workers, urls = self.urls.len(), "starting fetch pool");

        let handles: Vec<_> = (0..workers)
            .map(|worker_id| {
                tokio::spawn(worker_task(
                    worker_id,
                    self.fetcher.clone(),
                    Arc::clone(&queue),
                    result_tx.clone(),
                ))
            })
            .collect();

        // Dispatch: feed the queue, then close it by dropping the sender
        let urls = self.urls;
        tokio::spawn(async move {
            for raw in urls {
                if work_tx.send(normalize_url(&raw)).await.is_err() {
                    // Every worker has gone away (result stream dropped)
                    break;
                }
            }
        });

        // Completion watcher: the result stream ends once this sender and all
        // the workers' clones are gone
        tokio::spawn(async move {
            for joined in join_all(handles).await {
                if let Err(e) = joined {
                    error!(error = %e, "fetch worker panicked");
                }
            }
            drop(result_tx);
            debug!("all workers finished, closing result stream");
        });

        ReceiverStream::new(result_rx)
    }

    /// Runs the pool to completion and maps each URL to its digest, or to the
    /// error message if the fetch failed.
    pub async fn collect(self) -> HashMap<String, String> {
        self.run()
            .map(|result| {
                let summary = result.summary();
                (result.url, summary)
            })
            .collect()
            .await
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why a Mutex around the work receiver?
//    - tokio's mpsc is multi-producer, single-consumer
//    - Several workers need to consume from it, so they take turns holding
//      the receiver just long enough to pull one URL out
//
// 2. How does the result stream know it's finished?
//    - An mpsc channel closes when every Sender has been dropped
//    - Each worker owns a clone and drops it when it returns
//    - The watcher owns the original and drops it after join_all
//
// 3. Why are both channels bounded?
//    - The dispatch task can't run far ahead of the workers
//    - A slow consumer of the stream pushes back on the workers instead of
//      letting results pile up in memory
// -----------------------------------------------------------------------------

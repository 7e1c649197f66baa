// src/pool/worker.rs
// =============================================================================
// A single worker: take a URL, fetch it, checksum it, report, repeat.
//
// Worker lifecycle:
//   Idle -> Fetching -> Emitting -> Idle -> ... -> (queue closed) -> done
//
// All workers share one receiving end of the work channel. Only one worker
// can wait on it at a time, so it sits behind an async Mutex; the lock is
// released as soon as an item has been taken, never held across a fetch.
// =============================================================================

use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::debug;

use super::result::FetchResult;
use crate::fetcher::{checksum, Fetcher};

/// Receiving end of the work channel, shared by every worker.
pub(crate) type WorkQueue = Arc<Mutex<mpsc::Receiver<String>>>;

/// Processes URLs from `queue` until it is closed and drained.
pub(crate) async fn worker_task(
    worker_id: usize,
    fetcher: Fetcher,
    queue: WorkQueue,
    results: mpsc::Sender<FetchResult>,
) {
    debug!(worker_id, "worker started");

    loop {
        // Idle: wait for the next URL
        let url = {
            let mut rx = queue.lock().await;
            match rx.recv().await {
                Some(url) => url,
                None => break,
            }
        };

        // Fetching
        let outcome = match fetcher.fetch(&url).await {
            Ok(body) => Ok(checksum(&body)),
            Err(e) => {
                debug!(worker_id, url = %url, error = %e, "fetch failed");
                Err(e)
            }
        };

        // Emitting
        if results.send(FetchResult { url, outcome }).await.is_err() {
            // Nobody is listening for results any more, no point fetching the rest
            debug!(worker_id, "result stream dropped, stopping");
            return;
        }
    }

    debug!(worker_id, "work queue closed, worker finished");
}

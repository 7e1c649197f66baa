// src/lib.rs
// =============================================================================
// myhttp: fetch many URLs at once and fingerprint what comes back.
//
// Modules:
// - fetcher: one URL at a time (normalize, GET, checksum)
// - pool: many URLs at once with a fixed number of workers
// - logging: tracing setup for the binary
//
// Typical use:
//
//     let pool = Pool::builder(["example.com", "rust-lang.org"])
//         .concurrency(2)
//         .build()?;
//     let mut results = pool.run();
//     while let Some(result) = results.next().await {
//         println!("{} {}", result.url, result.summary());
//     }
// =============================================================================

pub mod fetcher;
pub mod logging;
pub mod pool;

pub use fetcher::{checksum, normalize_url, ClientConfig, FetchError, Fetcher};
pub use pool::{ConfigError, FetchResult, Pool, PoolBuilder, ResultStream, DEFAULT_PARALLELISM};

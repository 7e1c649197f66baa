// src/fetcher/mod.rs
// =============================================================================
// Everything needed to process a single URL.
//
// Submodules:
// - normalize: Defaults a missing scheme to https://
// - http: Performs the GET request and classifies failures
// - checksum: Fingerprints a response body
//
// The worker pool (src/pool/) glues these together for many URLs at once.
// =============================================================================

mod checksum;
mod http;
mod normalize;

pub use checksum::checksum;
pub use http::{ClientConfig, FetchError, Fetcher, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use normalize::normalize_url;

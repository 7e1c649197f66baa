// src/pool/result.rs
// =============================================================================
// The record a worker produces for each URL.
//
// A result holds either a digest or an error, never both and never neither.
// Instead of two optional fields we store a Result, so that rule is enforced
// by the type system rather than by convention.
// =============================================================================

use serde::{Serialize, Serializer};

use crate::fetcher::FetchError;

/// Outcome of fetching one URL.
#[derive(Debug)]
pub struct FetchResult {
    /// The normalized URL that was fetched
    pub url: String,
    /// Hex digest of the body, or why there is none
    pub outcome: Result<String, FetchError>,
}

impl FetchResult {
    pub fn digest(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.outcome.as_ref().err()
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The digest on success, the error message otherwise.
    ///
    /// This is what the CLI prints next to the URL.
    pub fn summary(&self) -> String {
        match &self.outcome {
            Ok(digest) => digest.clone(),
            Err(e) => e.to_string(),
        }
    }
}

// Flat shape used for JSON output:
//   {"url": "...", "digest": "..."}
//   {"url": "...", "error": "...", "kind": "transport"}
#[derive(Serialize)]
struct ResultRecord<'a> {
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    digest: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
}

impl Serialize for FetchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ResultRecord {
            url: &self.url,
            digest: self.digest(),
            error: self.error().map(|e| e.to_string()),
            kind: self.error().map(FetchError::kind),
        }
        .serialize(serializer)
    }
}

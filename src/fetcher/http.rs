// src/fetcher/http.rs
// =============================================================================
// Downloads one URL and hands back the raw body, or says why it couldn't.
//
// Key functionality:
// - Sends a GET with our identifying User-Agent header
// - Treats anything other than exactly 200 OK as a failure
// - Reads the whole body into memory on success
// - Sorts every failure into one of four kinds (see FetchError)
//
// The reqwest Client is cheap to clone (it's an Arc inside), so the same
// connection pool is shared by every worker in the pool.
// =============================================================================

use bytes::Bytes;
use reqwest::{header, Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Sent with every request so servers can identify us.
pub const DEFAULT_USER_AGENT: &str = "Adjust-bot/1.0";

/// Connect timeout and overall request timeout of the default client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// Everything that can go wrong while fetching a single URL
//
// None of these ever stop the pool; they end up in that URL's result.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL could not be turned into a request (bad scheme, empty host, ...)
    #[error("invalid request: {0}")]
    RequestConstruction(#[source] reqwest::Error),

    /// The request never got a response (DNS, connection refused, timeout)
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with something other than 200 OK
    #[error("unexpected response code: {0}")]
    UnexpectedStatus(StatusCode),

    /// The response started fine but the body could not be read to the end
    #[error("failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),
}

impl FetchError {
    /// Stable label for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::RequestConstruction(_) => "request_construction",
            FetchError::Transport(_) => "transport",
            FetchError::UnexpectedStatus(_) => "unexpected_status",
            FetchError::BodyRead(_) => "body_read",
        }
    }
}

/// Timeouts for the HTTP client built when the caller doesn't bring one.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_TIMEOUT,
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Same timeout for connecting and for the whole request.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            connect_timeout: timeout,
            request_timeout: timeout,
        }
    }

    /// Builds a reqwest Client with these timeouts.
    pub fn build_client(&self) -> Result<Client, reqwest::Error> {
        Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.request_timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
    }
}

/// Performs single GET requests against a shared client.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches `url` and returns the full body of a 200 OK response.
    ///
    /// The response is owned by this function, so its connection goes back
    /// to the pool (or is closed) on every return path, including the early
    /// return for a non-200 status where the body is never read.
    pub async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        // The header is set per request as well, since a caller-supplied
        // client may not have our User-Agent configured
        let request = self
            .client
            .get(url)
            .header(header::USER_AGENT, DEFAULT_USER_AGENT)
            .build()
            .map_err(FetchError::RequestConstruction)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus(status));
        }

        response.bytes().await.map_err(FetchError::BodyRead)
    }
}

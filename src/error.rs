//! Unified error types.

use thiserror::Error;

/// Top-level crate error.
#[derive(Error, Debug)]
pub enum TickerError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl HttpError {
    /// Whether the response arrived but its body could not be decoded.
    pub fn is_decode(&self) -> bool {
        match self {
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.is_decode(),
            _ => false,
        }
    }
}

/// Failures of the quote and trade-history feeds.
///
/// Quote failures degrade silently to the last-known-good snapshot; trade
/// failures surface a message in place of the trade list.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedError {
    /// The feed was unreachable or the transport failed.
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The feed responded but the payload was unusable (e.g. no `price`).
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The trade feed answered `success: false`.
    #[error("Feed reported failure: {}", .0.as_deref().unwrap_or("no message"))]
    FeedReportedFailure(Option<String>),
}

impl From<HttpError> for FeedError {
    fn from(e: HttpError) -> Self {
        if e.is_decode() {
            FeedError::MalformedResponse(e.to_string())
        } else {
            FeedError::NetworkFailure(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        FeedError::MalformedResponse(e.to_string())
    }
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Config validation failed: {0}")]
    Validation(String),
}

//! Fetch Errors
//!
//! The list view knows a single failure kind: the request did not produce a
//! usable collection. The variants only exist to make log lines useful.

use thiserror::Error;

/// Result alias for every remote call.
pub type FetchResult<T> = Result<T, FetchError>;

/// Network or payload failure talking to the remote collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Host unreachable, connection reset, CORS rejection...
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-2xx status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The body was not the JSON shape we expected.
    #[error("malformed payload: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

//! Content store error types.
//!
//! These never reach the renderer: [`super::Content`] turns every one of them
//! into an empty list or an absent record and logs it. They exist so the log
//! line says what actually went wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading from a content store.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Transport-level failure (DNS, TLS, connect, timeout).
    #[error("request to {host} failed: {source}")]
    Http {
        host: String,
        #[source]
        source: reqwest::Error,
    },

    /// The CMS answered with a non-success status.
    #[error("CMS returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Fixture file could not be read.
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// A store refused the query (used by test doubles and fixtures).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl ContentError {
    /// Whether the error came from the remote side rather than from us.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Status { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ContentError::Status {
            status: 400,
            message: "Unknown content type: raceEvent".into(),
        };
        let display = err.to_string();
        assert!(display.contains("400"));
        assert!(display.contains("raceEvent"));
        assert!(err.is_remote());
    }

    #[test]
    fn test_decode_from_serde() {
        let err: ContentError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("malformed response"));
        assert!(!err.is_remote());
    }
}

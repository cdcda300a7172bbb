//! Error types for Linkbrief operations.
//!
//! Extraction itself never fails: malformed markup degrades into a partial
//! [`SummarizationRecord`](crate::SummarizationRecord). The variants here belong
//! to the collaborators around the core (fetching pages, reading files and
//! serializing records).
//!
//! # Example
//!
//! ```rust
//! use linkbrief_core::{LinkbriefError, Result};
//!
//! fn require_url(input: &str) -> Result<&str> {
//!     if !linkbrief_core::is_valid_url(input) {
//!         return Err(LinkbriefError::InvalidUrl(input.to_string()));
//!     }
//!     Ok(input)
//! }
//! # assert!(require_url("not a url").is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Linkbrief collaborators.
#[derive(Error, Debug)]
pub enum LinkbriefError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The upstream server answered with a non-success status.
    #[error("Upstream returned HTTP status {status}")]
    HttpStatus { status: u16 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is not bookmarkable.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O errors while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized.
    #[error("Failed to serialize record: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for LinkbriefError {
    fn from(err: serde_json::Error) -> Self {
        LinkbriefError::Serialization(err.to_string())
    }
}

/// Result type alias for LinkbriefError.
pub type Result<T> = std::result::Result<T, LinkbriefError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LinkbriefError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_timeout_error() {
        let err = LinkbriefError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }

    #[test]
    fn test_status_error() {
        let err = LinkbriefError::HttpStatus { status: 404 };
        assert_eq!(err.to_string(), "Upstream returned HTTP status 404");
    }

    #[test]
    fn test_serde_error_conversion() {
        let err: LinkbriefError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, LinkbriefError::Serialization(_)));
    }
}

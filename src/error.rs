//! Error types for item-fetcher
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Fetch failures keep the underlying transport error untouched so callers
//! see exactly what the HTTP layer reported.

use thiserror::Error;

/// The main error type for item-fetcher
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Fetch Errors
    // ============================================================================
    /// Any failure while performing or decoding the HTTP exchange: network
    /// unreachable, non-success status, invalid JSON or an unexpected shape.
    #[error(transparent)]
    Fetch(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error came from the HTTP exchange itself
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Error::Fetch(_))
    }

    /// HTTP status code for non-2xx fetch failures
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Fetch(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The transport error, when this is a fetch failure
    pub fn as_fetch(&self) -> Option<&reqwest::Error> {
        match self {
            Error::Fetch(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias for item-fetcher
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for wtp_cache

use thiserror::Error;

/// Ways the artwork fetch can fail
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Remote returned a non-success status
    #[error("HTTP error {status} fetching {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    /// Identifier is empty or not purely numeric
    #[error("Malformed creature id: {0:?}")]
    MalformedId(String),
}

/// Unified error type for wtp_cache operations
#[derive(Debug, Error)]
pub enum WtpError {
    /// No record matches the requested groups
    #[error("Not found: {0}")]
    NotFound(String),
    /// Source artwork could not be retrieved
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),
    /// The shrouding transform rejected the source image
    #[error("Transform failed: {0}")]
    Transform(String),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Missing or malformed configuration
    #[error("Config error: {0}")]
    Config(String),
    /// Lookup table query failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl From<serde_yaml::Error> for WtpError {
    fn from(err: serde_yaml::Error) -> Self {
        WtpError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for WtpError {
    fn from(err: reqwest::Error) -> Self {
        WtpError::Fetch(FetchError::Network(err))
    }
}

/// Result alias for wtp_cache operations
pub type Result<T> = std::result::Result<T, WtpError>;

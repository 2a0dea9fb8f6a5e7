//! Error types for critview.

use thiserror::Error;

/// Result type alias using critview's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for critview operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request dispatch or transport failed
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded or is missing an expected entry
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A container element required by the page contract is absent
    #[error("Missing container: {0}")]
    MissingContainer(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Network(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::MalformedResponse(e.to_string())
    }
}

//! Error types for the LearnPortal client

use thiserror::Error;

/// Result type alias for LearnPortal client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the LearnPortal client
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication failed (401)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Authorization failed (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Server error (5xx)
    #[error("Server error: {0}")]
    Server(String),

    /// The response envelope reported failure
    #[error("{0}")]
    Api(String),

    /// HTTP request failed (network error, timeout, no response)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid caller input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session store I/O failed
    #[error("Session store error: {0}")]
    Session(String),
}

impl Error {
    /// Create an error from an HTTP status code and message
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            401 => Error::Authentication(message),
            403 => Error::Forbidden(message),
            404 => Error::NotFound(message),
            500..=599 => Error::Server(message),
            _ => Error::Api(format!("HTTP {}: {}", status, message)),
        }
    }
}

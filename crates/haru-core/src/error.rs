//! Error types for haru-core

use thiserror::Error;

/// Result type alias using haru-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the diary API
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Invalid input rejected before issuing a request
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),

    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON payload error
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The server rejected the session (HTTP 401)
    #[error("Not signed in")]
    Unauthorized,

    /// The requested resource does not exist (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success response from the server
    #[error("API error: {message} ({status})")]
    Api { status: u16, message: String },
}

impl Error {
    /// Whether this error means the user needs to sign in (again).
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

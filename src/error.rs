//! Error types for gitlab-mr
//!
//! Uses thiserror for structured errors. The CLI distinguishes protocol
//! errors (the server answered with a failing status) from connectivity
//! errors (no usable answer at all) when reporting them.

use thiserror::Error;

/// Main error type for gitlab-mr operations
#[derive(Error, Debug)]
pub enum Error {
    /// Server was reached but answered with a failing status code
    #[error("server rejected request with code {status}")]
    Status {
        /// HTTP status code returned by the server
        status: u16,
    },

    /// Request could not be sent or no response was received
    #[error("unable to reach server: {0}")]
    Http(#[from] reqwest::Error),

    /// Configured project URL is not a usable request URL
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command-line argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status code for protocol-level errors
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server could not be reached at all
    #[must_use]
    pub const fn is_connectivity(&self) -> bool {
        matches!(self, Self::Http(_) | Self::UrlParse(_))
    }
}

/// Result type alias for gitlab-mr operations
pub type Result<T> = std::result::Result<T, Error>;

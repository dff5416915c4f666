//! Error types for the Lanzou client.
//!
//! Every client operation returns [`Result`]. Nothing is retried or recovered
//! internally; errors reach the caller as they happened.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Connection, DNS, TLS, timeout or body read failure
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with something other than 200
    #[error("status:{0}")]
    HttpStatus(u16),

    /// Body is not JSON or does not have the expected shape
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The provider decoded fine but reported failure. Carries its message verbatim.
    #[error("{0}")]
    Provider(String),

    /// Local file could not be opened or inspected before upload
    #[error("cannot read {}: {source}", path.display())]
    Precondition {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the caller supplied upload source failed
    #[error("reading upload source failed: {0}")]
    Source(#[source] std::io::Error),
}

impl Error {
    /// HTTP status code, if this is a status error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }
}

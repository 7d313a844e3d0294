//! Error types for wardyn-http

use thiserror::Error;

/// Result type alias for wardyn-http operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while serving the gate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Listener or connection I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

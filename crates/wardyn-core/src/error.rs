//! Error types for wardyn-core

use thiserror::Error;

/// Result type alias for wardyn-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing a domain policy
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The allowed-domain set has no entries
    #[error("allowed-domain set must not be empty")]
    EmptyAllowlist,

    /// An allowed-domain entry is not a plausible DNS domain
    #[error("invalid allowed-domain entry: '{0}'")]
    InvalidDomain(String),

    /// A policy pattern failed to compile
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

//! Error types for meshscan

use thiserror::Error;

/// Main error type for meshscan operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed mesh buffer: {0}")]
    MalformedBuffer(String),
}

/// Result type alias for meshscan operations
pub type Result<T> = std::result::Result<T, Error>;

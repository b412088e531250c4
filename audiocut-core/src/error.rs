//! Error types shared across the audiocut crates.

use thiserror::Error;

/// Core error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Unknown output format name.
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}

/// Core result type.
pub type Result<T> = std::result::Result<T, Error>;

//! Unified error type for store, HTTP and configuration code.

use crate::person::PersonId;
use thiserror::Error;

/// Things that can go wrong when using the store.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// File system problem (stat, read, write, sync, rename).
    #[error("i/o error: {0}")]
    Io(String),
    /// The backing file exists but does not hold a valid collection.
    #[error("decode error: {0}")]
    Decode(String),
    /// Failed to encode the collection to bytes.
    #[error("encode error: {0}")]
    Encode(String),
    /// A person with this id is already stored.
    #[error("a person with id {0} already exists")]
    DuplicateId(PersonId),
    /// No person with this id is stored.
    #[error("no person with id {0}")]
    NotFound(PersonId),
    /// Input rejected before reaching the store (non-positive id, id mismatch).
    #[error("validation error: {0}")]
    Validation(String),
    /// Bad configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else if err.is_syntax() || err.is_eof() || err.is_data() {
            Error::Decode(err.to_string())
        } else {
            Error::Encode(err.to_string())
        }
    }
}

/// Result alias using our [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

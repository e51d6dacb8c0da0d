//! Error Types
//!
//! Every failure in the load path and the embedding operations is returned
//! to the caller as a `WordVecError`.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, WordVecError>;

/// Word2Vec loading and query errors
#[derive(Error, Debug)]
pub enum WordVecError {
    /// The archive is missing, unreadable, or not a valid zip container
    #[error("Failed to open model archive {}: {reason}", path.display())]
    ArchiveOpen { path: PathBuf, reason: String },

    /// No archive entry name contains the payload pattern
    #[error("No entry matching '{pattern}' in model archive {}", path.display())]
    PayloadNotFound { path: PathBuf, pattern: String },

    /// The matched entry declares more bytes than the configured limit
    #[error("Payload entry '{name}' is {size} bytes, limit is {limit}")]
    PayloadTooLarge { name: String, size: u64, limit: u64 },

    /// The payload decoded but its arrays are inconsistent
    #[error("Malformed model: {0}")]
    MalformedModel(String),

    /// A token looked up by `distance` or `most_similar` is not in the model
    #[error("No vector found for token {0}")]
    TokenNotFound(String),

    /// `transform` was called with an empty sentence
    #[error("Cannot average an empty sentence")]
    EmptyInput,

    /// A token's vector has zero length, so cosine similarity is undefined
    #[error("Token {0} has a zero-length vector")]
    DegenerateVector(String),
}

impl WordVecError {
    pub(crate) fn archive_open(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        WordVecError::ArchiveOpen {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        WordVecError::MalformedModel(reason.into())
    }

    /// True if the error is a token lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, WordVecError::TokenNotFound(_))
    }

    /// The token named by a lookup miss, if this is one
    pub fn missing_token(&self) -> Option<&str> {
        match self {
            WordVecError::TokenNotFound(token) => Some(token),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for WordVecError {
    fn from(err: serde_json::Error) -> Self {
        WordVecError::MalformedModel(format!("payload is not a valid model record: {}", err))
    }
}

//! # Errors
//!
//! One error type for the whole crate. Nothing here is logged or retried:
//! every failure goes back to the caller.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::Id;

/// Result type for fallible operations
pub type GeoResult<T> = Result<T, GeoError>;

/// Errors that can occur while resolving, persisting, or generating points
#[derive(Debug, Error)]
pub enum GeoError {
    /// A file could not be opened, created, read, or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A text record had the wrong shape or a non-numeric token
    #[error("Malformed record on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// No point with this id is registered
    #[error("Point id not found: {0}")]
    KeyNotFound(Id),

    /// A point with this id is already registered
    #[error("Duplicate point id: {0}")]
    DuplicateKey(Id),

    /// The registry a shape was bound to no longer exists
    #[error("Registry dropped while a shape still references it")]
    RegistryDropped,

    /// A raw coordinate buffer had the wrong length
    #[error("Arity mismatch: expected {expected} coordinates, got {got}")]
    Arity { expected: usize, got: usize },

    /// A sampling range had `lo > hi` or a NaN bound
    #[error("Invalid range on axis {axis}")]
    InvalidRange { axis: usize },

    /// Rejection sampling hit its configured cap
    #[error("Gave up after {attempts} attempts with {accepted} points accepted")]
    AttemptsExhausted { accepted: usize, attempts: u64 },

    /// More generated points were requested than there are distinct ids
    #[error("Cannot assign {requested} distinct ids, the limit is {}", u32::MAX)]
    IdSpaceExhausted { requested: usize },
}

impl GeoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GeoError::Io {
            path: path.into(),
            source,
        }
    }
}

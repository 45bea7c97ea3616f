//! Store error types for ver-store.

use std::path::PathBuf;

use thiserror::Error;
use ver_core::errors::CoreError;

/// Errors from engagement store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Caller input was rejected (e.g., a blank engagement name).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Referenced engagement or audit entry does not exist.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Persisting the collection failed. Memory and disk are unchanged.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The collection could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// ID generation or another core failure.
    #[error(transparent)]
    Core(#[from] CoreError),
}

//! # Storage Error Types
//!
//! Error types for durable slot operations.
//!
//! Callers treat these as advisory: a read error degrades to the empty
//! initial state and a write error leaves the in-memory state authoritative.
//! Nothing here is fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Durable slot operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The slot file could not be read or written.
    #[error("slot file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory value could not be serialized for the slot.
    #[error("failed to serialize slot '{slot}': {source}")]
    Serialize {
        slot: String,
        #[source]
        source: serde_json::Error,
    },

    /// The slot file exists but does not parse as the expected shape.
    #[error("slot '{slot}' is corrupt: {source}")]
    Corrupt {
        slot: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results with StorageError.
pub type StorageResult<T> = Result<T, StorageError>;

//! Error types shared across the storage and store layers.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::ItemId;

/// Failures of a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read slot file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write slot file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create storage directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage quota exceeded for '{key}': {needed} bytes needed, limit is {limit}")]
    QuotaExceeded {
        key: String,
        limit: usize,
        needed: usize,
    },

    #[error("Storage unavailable for '{key}'")]
    Unavailable { key: String },
}

/// Reasons a persisted record set is rejected on load.
///
/// Never surfaced to callers of the store: any of these means the slot
/// is treated as empty.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Persisted list is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record {index} has an invalid id: {value}")]
    InvalidId { index: usize, value: String },

    #[error("Duplicate id {id} in persisted list")]
    DuplicateId { id: ItemId },

    #[error("Record {index} has empty text")]
    EmptyText { index: usize },
}

/// Non-fatal persistence failure reported back from a mutation.
///
/// The in-memory list stays authoritative for the rest of the session.
#[derive(Debug, Error)]
pub enum PersistWarning {
    #[error("List could not be saved: {0}")]
    Storage(#[from] StorageError),

    #[error("List could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

//! Error types for list operations, storage and the share codec.

use thiserror::Error;

/// Rejected user input. The list is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("Please enter an item name")]
    EmptyName,
}

/// Durable storage failures. Never fatal: the store keeps working in memory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is not available: {0}")]
    Unavailable(String),
    #[error("failed to read key {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Failures while encoding or decoding a list payload.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("failed to serialize list: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("malformed percent-escape at byte {0}")]
    MalformedEscape(usize),
    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("payload is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("payload is not a list")]
    NotASequence,
    #[error("invalid item in payload: {0}")]
    InvalidItem(String),
    #[error("duplicate item id {0}")]
    DuplicateId(String),
}

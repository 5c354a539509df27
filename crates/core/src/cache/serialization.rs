//! Pure functions for serializing/deserializing records to/from cache values.
//!
//! These functions use JSON serialization for cache storage, providing human-readable
//! cache values that are easy to debug and inspect.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize a cached value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a single record to a JSON string.
pub fn serialize_record<T: Serialize>(record: &T) -> Result<String> {
    serde_json::to_string(record).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes a JSON string to a single record.
pub fn deserialize_record<T: DeserializeOwned>(value: &str) -> Result<T> {
    serde_json::from_str(value).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a slice of records to a JSON array string.
///
/// An empty slice encodes as `[]`.
pub fn serialize_records<T: Serialize>(records: &[T]) -> Result<String> {
    serde_json::to_string(records).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes a JSON array string to a vector of records.
pub fn deserialize_records<T: DeserializeOwned>(value: &str) -> Result<Vec<T>> {
    serde_json::from_str(value).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

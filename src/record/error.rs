//! Error types for record encoding.

use thiserror::Error;

/// Errors raised while converting a record to or from its JSON form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The JSON payload could not be produced or parsed.
    #[error("record serialization error: {0}")]
    Serialization(String),
}

impl RecordError {
    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

//! Message lifecycle tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lifecycle tag of a message.
///
/// Persisted lowercase so older readers keep working; parsed
/// case-insensitively. Surrounding whitespace is not tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageState {
    /// Freshly produced and not yet handled.
    New,
    /// Legacy marker; no producer sets it.
    Read,
    /// A consumer could not build a handler for the message.
    Unprocessable,
}

impl MessageState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Unprocessable => "unprocessable",
        }
    }
}

impl fmt::Display for MessageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned while parsing a lifecycle tag from storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown message state: {0}")]
pub struct ParseMessageStateError(pub String);

impl TryFrom<&str> for MessageState {
    type Error = ParseMessageStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.to_ascii_lowercase();
        match normalized.as_str() {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "unprocessable" => Ok(Self::Unprocessable),
            _ => Err(ParseMessageStateError(value.to_owned())),
        }
    }
}

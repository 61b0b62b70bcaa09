//! Message identifier newtype.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a message, unique within one delivery scope.
///
/// Identifiers read back from storage may be any string, so the value is not
/// constrained to UUID form; freshly generated identifiers are UUIDv4 strings.
///
/// # Examples
///
/// ```
/// use cluster_message::message::domain::MessageId;
///
/// let id = MessageId::new();
/// assert_ne!(id, MessageId::new());
/// assert_eq!(MessageId::from("msg-1").as_str(), "msg-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Creates a new random message identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Note: This implementation generates a new random identifier on each call.
/// Use `MessageId::new()` when the intent should be explicit.
impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for MessageId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for MessageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for MessageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Key-builder port for message routing.
//!
//! The message entity decides only whether it is addressed to the controller;
//! the path layout itself belongs to the implementation of this port.

use crate::message::domain::MessageId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical storage and delivery path of a cluster property.
///
/// # Examples
///
/// ```
/// use cluster_message::message::ports::key_builder::PropertyKey;
///
/// let key = PropertyKey::new("/cluster/CONTROLLER/MESSAGES/m1");
/// assert_eq!(key.as_str(), "/cluster/CONTROLLER/MESSAGES/m1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyKey(String);

impl PropertyKey {
    /// Creates a key from a path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Port producing the paths under which messages are stored.
///
/// Implementations must be stateless with respect to individual messages:
/// the same arguments always produce the same key.
pub trait KeyBuilder {
    /// Returns the path of a message addressed to the controller.
    fn controller_message(&self, id: &MessageId) -> PropertyKey;

    /// Returns the path of a message in the mailbox of `instance_name`.
    fn message(&self, instance_name: &str, id: &MessageId) -> PropertyKey;
}

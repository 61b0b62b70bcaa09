//! Domain error types for message handling.
//!
//! Uses `thiserror` for typed variants that callers can match on. Structural
//! invalidity of a state transition is not an error; see
//! [`crate::record::Property::is_valid`].

use super::domain::MessageId;
use thiserror::Error;

/// Errors raised by message operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessageError {
    /// A reply was requested for a message that carries no correlation id.
    #[error("message {message_id} does not contain correlation id")]
    CorrelationMissing {
        /// The message that could not be replied to.
        message_id: MessageId,
    },

    /// The lifecycle tag is absent or names no known state.
    #[error(
        "message {message_id} has malformed lifecycle tag: {}",
        describe_tag(.value.as_deref())
    )]
    MalformedLifecycleTag {
        /// The message whose tag could not be read.
        message_id: MessageId,
        /// The stored value, `None` when nothing was recorded.
        value: Option<String>,
    },

    /// The inner-message payload is not an encoded record.
    #[error("message {message_id} has malformed inner message: {reason}")]
    MalformedInnerMessage {
        /// The enveloping message.
        message_id: MessageId,
        /// Description of the decoding failure.
        reason: String,
    },
}

fn describe_tag(value: Option<&str>) -> String {
    value.map_or_else(|| "<missing>".to_owned(), |tag| format!("'{tag}'"))
}

impl MessageError {
    /// Creates a correlation-missing error.
    #[must_use]
    pub const fn correlation_missing(message_id: MessageId) -> Self {
        Self::CorrelationMissing { message_id }
    }

    /// Creates a malformed lifecycle tag error.
    #[must_use]
    pub fn malformed_lifecycle_tag(message_id: MessageId, value: Option<&str>) -> Self {
        Self::MalformedLifecycleTag {
            message_id,
            value: value.map(str::to_owned),
        }
    }

    /// Creates a malformed inner message error.
    #[must_use]
    pub fn malformed_inner_message(message_id: MessageId, reason: impl Into<String>) -> Self {
        Self::MalformedInnerMessage {
            message_id,
            reason: reason.into(),
        }
    }
}

//! Field-name vocabulary shared by every process reading or writing messages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Key under which a message field is stored in its backing record.
///
/// Names are case-sensitive and must match across every process in a
/// cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Attribute {
    /// Message identifier.
    MsgId,
    /// Session of the sending process.
    SrcSessionId,
    /// Session the message is addressed to.
    TgtSessionId,
    /// Name of the sending instance.
    SrcName,
    /// Name of the target instance.
    TgtName,
    /// Role of the sending instance.
    SrcInstanceType,
    /// Lifecycle tag, stored lowercase.
    MsgState,
    /// Partition name (scalar) or partition names (list).
    PartitionName,
    /// Resource owning the partition.
    ResourceName,
    /// State the partition transitions from.
    FromState,
    /// State the partition transitions to.
    ToState,
    /// State-model definition name.
    StateModelDef,
    /// Creation time in epoch milliseconds.
    CreateTimestamp,
    /// Time the consumer read the message.
    ReadTimestamp,
    /// Time execution started.
    ExecuteStartTimestamp,
    /// Message type discriminant.
    MsgType,
    /// Free-form sub-type.
    MsgSubtype,
    /// Token linking a reply to its request.
    CorrelationId,
    /// Result mapping carried by a reply.
    MessageResult,
    /// Session under which the message executes.
    ExeSessionId,
    /// Execution timeout in milliseconds.
    Timeout,
    /// Number of retries performed.
    RetryCount,
    /// State-model factory name.
    StateModelFactoryName,
    /// Chunking hint for large payloads.
    BucketSize,
    /// Identifier of the group message this one was split from.
    ParentMsgId,
    /// Encoded envelope payload.
    InnerMessage,
}

impl Attribute {
    /// Every attribute, in declaration order.
    pub const ALL: [Self; 26] = [
        Self::MsgId,
        Self::SrcSessionId,
        Self::TgtSessionId,
        Self::SrcName,
        Self::TgtName,
        Self::SrcInstanceType,
        Self::MsgState,
        Self::PartitionName,
        Self::ResourceName,
        Self::FromState,
        Self::ToState,
        Self::StateModelDef,
        Self::CreateTimestamp,
        Self::ReadTimestamp,
        Self::ExecuteStartTimestamp,
        Self::MsgType,
        Self::MsgSubtype,
        Self::CorrelationId,
        Self::MessageResult,
        Self::ExeSessionId,
        Self::Timeout,
        Self::RetryCount,
        Self::StateModelFactoryName,
        Self::BucketSize,
        Self::ParentMsgId,
        Self::InnerMessage,
    ];

    /// Returns the wire key name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MsgId => "MSG_ID",
            Self::SrcSessionId => "SRC_SESSION_ID",
            Self::TgtSessionId => "TGT_SESSION_ID",
            Self::SrcName => "SRC_NAME",
            Self::TgtName => "TGT_NAME",
            Self::SrcInstanceType => "SRC_INSTANCE_TYPE",
            Self::MsgState => "MSG_STATE",
            Self::PartitionName => "PARTITION_NAME",
            Self::ResourceName => "RESOURCE_NAME",
            Self::FromState => "FROM_STATE",
            Self::ToState => "TO_STATE",
            Self::StateModelDef => "STATE_MODEL_DEF",
            Self::CreateTimestamp => "CREATE_TIMESTAMP",
            Self::ReadTimestamp => "READ_TIMESTAMP",
            Self::ExecuteStartTimestamp => "EXECUTE_START_TIMESTAMP",
            Self::MsgType => "MSG_TYPE",
            Self::MsgSubtype => "MSG_SUBTYPE",
            Self::CorrelationId => "CORRELATION_ID",
            Self::MessageResult => "MESSAGE_RESULT",
            Self::ExeSessionId => "EXE_SESSION_ID",
            Self::Timeout => "TIMEOUT",
            Self::RetryCount => "RETRY_COUNT",
            Self::StateModelFactoryName => "STATE_MODEL_FACTORY_NAME",
            Self::BucketSize => "BUCKET_SIZE",
            Self::ParentMsgId => "PARENT_MSG_ID",
            Self::InnerMessage => "INNER_MESSAGE",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a key names no known attribute.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown message attribute: {0}")]
pub struct ParseAttributeError(pub String);

impl FromStr for Attribute {
    type Err = ParseAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attribute| attribute.as_str() == s)
            .ok_or_else(|| ParseAttributeError(s.to_owned()))
    }
}

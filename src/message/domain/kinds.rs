//! Message and instance type vocabularies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Message type discriminant.
///
/// Only [`MessageType::StateTransition`] carries structurally required
/// fields; the other kinds hold type-specific payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    /// Instructs a participant to move a partition between states.
    StateTransition,
    /// Scheduled task issued on behalf of a client.
    #[serde(rename = "SCHEDULER_MSG")]
    Scheduler,
    /// Application-defined message.
    #[serde(rename = "USER_DEFINE_MSG")]
    UserDefine,
    /// Message addressed to or issued by the controller itself.
    #[serde(rename = "CONTROLLER_MSG")]
    Controller,
    /// Reply carrying the results of a task.
    TaskReply,
    /// Message with no payload.
    NoOp,
    /// Error reported by a participant.
    ParticipantErrorReport,
}

impl MessageType {
    /// Every message type, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::StateTransition,
        Self::Scheduler,
        Self::UserDefine,
        Self::Controller,
        Self::TaskReply,
        Self::NoOp,
        Self::ParticipantErrorReport,
    ];

    /// Returns the stored type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StateTransition => "STATE_TRANSITION",
            Self::Scheduler => "SCHEDULER_MSG",
            Self::UserDefine => "USER_DEFINE_MSG",
            Self::Controller => "CONTROLLER_MSG",
            Self::TaskReply => "TASK_REPLY",
            Self::NoOp => "NO_OP",
            Self::ParticipantErrorReport => "PARTICIPANT_ERROR_REPORT",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown message type name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown message type: {0}")]
pub struct ParseMessageTypeError(pub String);

impl TryFrom<&str> for MessageType {
    type Error = ParseMessageTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ParseMessageTypeError(value.to_owned()))
    }
}

impl FromStr for MessageType {
    type Err = ParseMessageTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// Role of a process within the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceType {
    /// The cluster controller.
    Controller,
    /// A member executing instructions.
    Participant,
    /// A read-only observer of cluster state.
    Spectator,
    /// A process acting as both controller and participant.
    ControllerParticipant,
    /// An administrative client.
    Administrator,
}

impl InstanceType {
    /// Returns the stored symbolic name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Controller => "CONTROLLER",
            Self::Participant => "PARTICIPANT",
            Self::Spectator => "SPECTATOR",
            Self::ControllerParticipant => "CONTROLLER_PARTICIPANT",
            Self::Administrator => "ADMINISTRATOR",
        }
    }
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown instance type name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown instance type: {0}")]
pub struct ParseInstanceTypeError(pub String);

impl FromStr for InstanceType {
    type Err = ParseInstanceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONTROLLER" => Ok(Self::Controller),
            "PARTICIPANT" => Ok(Self::Participant),
            "SPECTATOR" => Ok(Self::Spectator),
            "CONTROLLER_PARTICIPANT" => Ok(Self::ControllerParticipant),
            "ADMINISTRATOR" => Ok(Self::Administrator),
            _ => Err(ParseInstanceTypeError(s.to_owned())),
        }
    }
}

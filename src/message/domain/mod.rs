//! Domain types for coordination messages.
//!
//! This module contains the message entity and the closed vocabularies that
//! give its untyped backing record meaning. Nothing here performs I/O.

mod attribute;
mod ids;
mod kinds;
mod message;
mod ordering;
mod reply;
mod routing;
mod state;

pub use attribute::{Attribute, ParseAttributeError};
pub use ids::MessageId;
pub use kinds::{InstanceType, MessageType, ParseInstanceTypeError, ParseMessageTypeError};
pub use message::{CONTROLLER_NAME, DEFAULT_EXECUTION_TIMEOUT, Message, WILDCARD_SESSION_ID};
pub use ordering::{compare_create_time, sort_by_create_time};
pub use state::{MessageState, ParseMessageStateError};

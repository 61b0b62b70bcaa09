//! Coordination messages exchanged between cluster processes.
//!
//! A message instructs a participant to perform a state transition, carries a
//! task reply, or reports an error. It is a typed view over a generic
//! [`crate::record::Record`]; persistence and delivery belong to the caller.
//!
//! # Architecture
//!
//! - **Domain**: the entity and its vocabularies ([`domain::Message`],
//!   [`domain::MessageType`], [`domain::MessageState`], [`domain::Attribute`])
//! - **Ports**: the routing seam ([`ports::KeyBuilder`])
//! - **Adapters**: concrete port implementations ([`adapters::ClusterKeyBuilder`])
//!
//! # Example
//!
//! ```
//! use cluster_message::message::adapters::ClusterKeyBuilder;
//! use cluster_message::message::domain::{Message, MessageType};
//! use cluster_message::record::Property;
//! use mockable::DefaultClock;
//!
//! let mut message = Message::new(MessageType::StateTransition, "msg-1", &DefaultClock);
//! message.set_tgt_name("localhost_12918");
//! message.set_partition_name("TestDB_0");
//! message.set_resource_name("TestDB");
//! message.set_state_model_def("MasterSlave");
//! message.set_state_model_factory_name("DEFAULT");
//! message.set_from_state("OFFLINE");
//! message.set_to_state("SLAVE");
//! assert!(message.is_valid());
//!
//! let key = message.key(&ClusterKeyBuilder::new("TEST"), "localhost_12918");
//! assert_eq!(key.as_str(), "/TEST/INSTANCES/localhost_12918/MESSAGES/msg-1");
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;

#[cfg(test)]
mod tests;

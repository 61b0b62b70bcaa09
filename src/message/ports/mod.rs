//! Port trait definitions for the message subsystem.
//!
//! Ports define the interfaces the domain requires from the surrounding
//! cluster-management system. Adapters implement them.

pub mod key_builder;

pub use key_builder::{KeyBuilder, PropertyKey};

//! Cluster coordination messages.
//!
//! This crate models the message exchanged between a cluster controller and
//! its participants: how it is constructed over a generic versioned record,
//! validated, answered, ordered, and routed to a storage key.
//!
//! # Modules
//!
//! - [`record`]: Generic versioned record and the property facade
//! - [`message`]: Message entity, vocabularies, and routing port

pub mod message;
pub mod record;

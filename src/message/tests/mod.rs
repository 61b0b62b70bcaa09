//! Unit tests for the message module.
//!
//! Tests are organised by concern: vocabularies, construction, accessors,
//! partition grouping, validity, reply derivation, routing and ordering.

mod partition_tests;
#[path = "../../../tests/test_helpers/mod.rs"]
mod support;

//! Unit tests for grouped partition names.

use super::support::FixedClock;
use crate::message::domain::{Message, MessageType};
use rstest::{fixture, rstest};

#[fixture]
fn message() -> Message {
    Message::new(MessageType::StateTransition, "group", &FixedClock::at_millis(1))
}

#[rstest]
fn partition_names_are_empty_until_populated(message: Message) {
    assert!(message.partition_names().is_empty());
}

#[rstest]
fn adding_twice_keeps_a_single_entry(mut message: Message) {
    message.add_partition_name("TestDB_0");
    message.add_partition_name("TestDB_0");
    assert_eq!(message.partition_names(), ["TestDB_0".to_owned()]);
}

#[rstest]
fn distinct_names_keep_insertion_order(mut message: Message) {
    message.add_partition_name("TestDB_2");
    message.add_partition_name("TestDB_0");
    message.add_partition_name("TestDB_2");
    message.add_partition_name("TestDB_1");

    assert_eq!(
        message.partition_names(),
        ["TestDB_2".to_owned(), "TestDB_0".to_owned(), "TestDB_1".to_owned()]
    );
}

#[rstest]
fn grouped_list_does_not_touch_single_partition_name(mut message: Message) {
    message.set_partition_name("TestDB_9");
    message.add_partition_name("TestDB_0");

    assert_eq!(message.partition_name(), Some("TestDB_9"));
    assert_eq!(message.partition_names(), ["TestDB_0".to_owned()]);
}

//! Behavioural integration tests for the message exchange flow.
//!
//! These tests follow a message from the controller to a participant and a
//! task reply back, the way a consumer reads messages out of the store.

mod test_helpers;

use cluster_message::message::{
    adapters::ClusterKeyBuilder,
    domain::{
        CONTROLLER_NAME, InstanceType, Message, MessageState, MessageType, WILDCARD_SESSION_ID,
        sort_by_create_time,
    },
    error::MessageError,
};
use cluster_message::record::{FieldMap, Property, Record};
use mockable::DefaultClock;
use test_helpers::FixedClock;

fn transition(id: &str, partition: &str, clock: &FixedClock) -> Message {
    let mut message = Message::new(MessageType::StateTransition, id, clock);
    message.set_src_name(CONTROLLER_NAME);
    message.set_src_instance_type(InstanceType::Controller);
    message.set_src_session_id("controller-session");
    message.set_tgt_name("localhost_12918");
    message.set_tgt_session_id("participant-session");
    message.set_partition_name(partition);
    message.set_resource_name("TestDB");
    message.set_state_model_def("MasterSlave");
    message.set_state_model_factory_name("DEFAULT");
    message.set_from_state("OFFLINE");
    message.set_to_state("SLAVE");
    message
}

// ============================================================================
// Scenario: Controller dispatches a transition to a participant
// ============================================================================

/// A persisted transition read back by the participant keeps every field,
/// stays valid, and resolves into the participant's mailbox.
#[test]
fn participant_reads_back_dispatched_transition() -> eyre::Result<()> {
    // Arrange
    let message = transition("m1", "TestDB_0", &FixedClock::at_millis(5_000));
    let builder = ClusterKeyBuilder::new("TEST");
    let key = message.key(&builder, "localhost_12918");
    let payload = message.record().to_json()?;

    // Act
    let received = Message::from_record(Record::from_json(&payload)?, &DefaultClock);

    // Assert
    assert_eq!(key.as_str(), "/TEST/INSTANCES/localhost_12918/MESSAGES/m1");
    assert!(received.is_valid());
    assert_eq!(received.create_timestamp(), 5_000);
    assert_eq!(received.message_state()?, MessageState::New);
    assert_eq!(received.partition_name(), Some("TestDB_0"));
    assert_eq!(received.src_instance_type(), InstanceType::Controller);
    Ok(())
}

// ============================================================================
// Scenario: Participant processes pending messages oldest first
// ============================================================================

/// Pending messages are handled in creation order and their execution
/// metadata is recorded by the consumer.
#[test]
fn participant_processes_pending_messages_in_creation_order() {
    // Arrange
    let mut pending = vec![
        transition("m-late", "TestDB_2", &FixedClock::at_millis(300)),
        transition("m-early", "TestDB_0", &FixedClock::at_millis(100)),
        transition("m-mid", "TestDB_1", &FixedClock::at_millis(200)),
    ];

    // Act
    sort_by_create_time(&mut pending);
    for (offset, message) in (0_i64..).zip(pending.iter_mut()) {
        message.set_read_timestamp(1_000 + offset);
        message.set_execute_start_timestamp(2_000 + offset);
        message.set_retry_count(1);
    }

    // Assert
    let partitions: Vec<_> = pending.iter().filter_map(Message::partition_name).collect();
    assert_eq!(partitions, vec!["TestDB_0", "TestDB_1", "TestDB_2"]);
    assert!(pending.iter().all(|m| m.read_timestamp() >= 1_000));
    assert!(pending.iter().all(|m| m.retry_count() == 1));
}

// ============================================================================
// Scenario: Participant replies to a correlated request
// ============================================================================

/// A reply to a controller-issued request is addressed to the controller's
/// mailbox under any session.
#[test]
fn participant_replies_to_controller() -> eyre::Result<()> {
    // Arrange
    let clock = FixedClock::at_millis(10_000);
    let mut request = transition("m1", "TestDB_0", &clock);
    request.set_correlation_id("corr-42");
    let mut results = FieldMap::new();
    results.insert("status".to_owned(), "COMPLETED".to_owned());

    // Act
    let reply = Message::create_reply(&request, "localhost_12918", results, &clock)?;
    let key = reply.key(&ClusterKeyBuilder::new("TEST"), "localhost_12918");

    // Assert
    assert_eq!(reply.message_type(), Some(MessageType::TaskReply));
    assert_eq!(reply.correlation_id(), Some("corr-42"));
    assert_eq!(reply.tgt_session_id(), Some(WILDCARD_SESSION_ID));
    assert_eq!(reply.src_name(), Some("localhost_12918"));
    assert_eq!(
        key.as_str(),
        format!("/TEST/CONTROLLER/MESSAGES/{}", reply.message_id())
    );
    Ok(())
}

/// A participant-to-participant reply lands in the requester's mailbox.
#[test]
fn participant_replies_to_peer() -> eyre::Result<()> {
    // Arrange
    let clock = FixedClock::at_millis(10_000);
    let mut request = Message::new(MessageType::UserDefine, "peer-req", &clock);
    request.set_src_name("localhost_12919");
    request.set_src_instance_type(InstanceType::Participant);
    request.set_tgt_name("localhost_12918");
    request.set_correlation_id("corr-7");

    // Act
    let reply = Message::create_reply(&request, "localhost_12918", FieldMap::new(), &clock)?;
    let key = reply.key(&ClusterKeyBuilder::new("TEST"), "localhost_12919");

    // Assert
    assert_eq!(reply.tgt_name(), Some("localhost_12919"));
    assert_eq!(
        key.as_str(),
        format!("/TEST/INSTANCES/localhost_12919/MESSAGES/{}", reply.message_id())
    );
    Ok(())
}

/// Replying to an uncorrelated request is refused.
#[test]
fn uncorrelated_request_cannot_be_answered() {
    let clock = FixedClock::at_millis(10_000);
    let request = transition("m1", "TestDB_0", &clock);

    let result = Message::create_reply(&request, "localhost_12918", FieldMap::new(), &clock);

    assert!(matches!(result, Err(MessageError::CorrelationMissing { .. })));
}

// ============================================================================
// Scenario: Consumer marks a message it cannot handle
// ============================================================================

/// A consumer that fails to build a handler tags the message unprocessable;
/// the tag survives storage in lowercase.
#[test]
fn unprocessable_tag_survives_storage() -> eyre::Result<()> {
    let mut message = transition("m1", "TestDB_0", &FixedClock::at_millis(1));
    message.set_message_state(MessageState::Unprocessable);

    let stored = Record::from_json(&message.record().to_json()?)?;
    assert_eq!(stored.simple_field("MSG_STATE"), Some("unprocessable"));

    let reloaded = Message::from_record(stored, &DefaultClock);
    assert_eq!(reloaded.message_state()?, MessageState::Unprocessable);
    Ok(())
}

// ============================================================================
// Scenario: Controller splits a group message
// ============================================================================

/// Sub-messages cloned from a group template keep its fields and point back
/// at the parent.
#[test]
fn group_message_is_split_into_children() {
    let clock = FixedClock::at_millis(1);
    let mut group = transition("group", "TestDB_0", &clock);
    for partition in ["TestDB_0", "TestDB_1", "TestDB_0"] {
        group.add_partition_name(partition);
    }

    let children: Vec<Message> = group
        .partition_names()
        .iter()
        .map(|partition| {
            let mut child =
                Message::from_record_with_id(group.record(), format!("group-{partition}"));
            child.set_partition_name(partition.as_str());
            child.set_parent_msg_id(&group.message_id());
            child
        })
        .collect();

    assert_eq!(children.len(), 2);
    assert!(children.iter().all(Property::is_valid));
    assert!(children.iter().all(|c| c.parent_msg_id() == Some("group")));
    assert_eq!(
        children.get(1).and_then(Message::partition_name),
        Some("TestDB_1")
    );
}

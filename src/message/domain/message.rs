//! The message entity: a typed view over one [`Record`].
//!
//! Every accessor reads or writes the backing record under an [`Attribute`]
//! key. Absent fields read back as `None` or a documented numeric default,
//! with one exception: [`Message::message_state`] fails fast when no
//! readable lifecycle tag is stored.

use super::{Attribute, InstanceType, MessageId, MessageState, MessageType};
use crate::message::error::MessageError;
use crate::record::{FieldMap, Property, Record};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Session id matching any target session.
pub const WILDCARD_SESSION_ID: &str = "*";

/// Well-known name of the cluster controller.
pub const CONTROLLER_NAME: &str = "Controller";

/// Execution timeout meaning "no timeout".
pub const DEFAULT_EXECUTION_TIMEOUT: i32 = -1;

/// A coordination message exchanged between cluster processes.
///
/// The message owns its backing record exclusively. Cloning copies the
/// record; nothing is shared between clones.
///
/// # Examples
///
/// ```
/// use cluster_message::message::domain::{Message, MessageState, MessageType};
/// use cluster_message::record::Property;
/// use mockable::DefaultClock;
///
/// let mut message = Message::new(MessageType::StateTransition, "msg-1", &DefaultClock);
/// message.set_resource_name("TestDB");
/// message.set_partition_name("TestDB_0");
///
/// assert_eq!(message.message_state(), Ok(MessageState::New));
/// assert!(message.create_timestamp() > 0);
/// assert!(!message.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    record: Record,
}

impl Message {
    /// Creates a fresh message of the given type.
    ///
    /// The lifecycle tag is set to [`MessageState::New`] and the creation
    /// timestamp to the clock's current time.
    #[must_use]
    pub fn new(message_type: MessageType, id: impl Into<MessageId>, clock: &impl Clock) -> Self {
        Self::with_type_name(message_type.as_str(), id, clock)
    }

    /// Creates a fresh message carrying a free-form type name.
    #[must_use]
    pub fn with_type_name(type_name: &str, id: impl Into<MessageId>, clock: &impl Clock) -> Self {
        let message_id = id.into();
        let mut message = Self {
            record: Record::new(message_id.as_str()),
        };
        message.set_simple(Attribute::MsgType, type_name);
        message.set_msg_id(&message_id);
        message.set_message_state(MessageState::New);
        message.set_create_timestamp(now_millis(clock));
        message
    }

    /// Wraps a previously obtained record.
    ///
    /// Fields already present are kept. A missing lifecycle tag becomes
    /// [`MessageState::New`]; a missing or zero creation timestamp becomes the
    /// clock's current time. An unreadable tag is left for
    /// [`Message::message_state`] to report.
    #[must_use]
    pub fn from_record(record: Record, clock: &impl Clock) -> Self {
        let mut message = Self { record };
        if message.simple(Attribute::MsgState).is_none() {
            tracing::debug!(message_id = message.record.id(), "assigning default lifecycle tag");
            message.set_message_state(MessageState::New);
        }
        if message.create_timestamp() == 0 {
            tracing::debug!(message_id = message.record.id(), "assigning creation timestamp");
            message.set_create_timestamp(now_millis(clock));
        }
        message
    }

    /// Copies `record` under a new identifier and rewrites the id field.
    ///
    /// No lifecycle or timestamp defaults are applied.
    #[must_use]
    pub fn from_record_with_id(record: &Record, id: impl Into<MessageId>) -> Self {
        let message_id = id.into();
        let mut message = Self {
            record: Record::with_id(record, message_id.as_str()),
        };
        message.set_msg_id(&message_id);
        message
    }

    fn simple(&self, attribute: Attribute) -> Option<&str> {
        self.record.simple_field(attribute.as_str())
    }

    fn set_simple(&mut self, attribute: Attribute, value: impl Into<String>) {
        self.record.set_simple_field(attribute.as_str(), value);
    }

    /// Returns the identifier of the backing record as a [`MessageId`].
    ///
    /// [`Property::id`] returns the same value as a string slice.
    #[must_use]
    pub fn message_id(&self) -> MessageId {
        MessageId::from(self.record.id())
    }

    /// Returns the identifier stored in the `MSG_ID` field.
    ///
    /// Only the constructors write this field, keeping it equal to the record
    /// identifier.
    #[must_use]
    pub fn msg_id(&self) -> Option<&str> {
        self.simple(Attribute::MsgId)
    }

    fn set_msg_id(&mut self, id: &MessageId) {
        self.set_simple(Attribute::MsgId, id.as_str());
    }

    /// Returns the stored type name, which may be a custom type.
    #[must_use]
    pub fn message_type_name(&self) -> Option<&str> {
        self.simple(Attribute::MsgType)
    }

    /// Returns the message type, `None` when absent or not a known type.
    #[must_use]
    pub fn message_type(&self) -> Option<MessageType> {
        self.message_type_name()
            .and_then(|name| MessageType::try_from(name).ok())
    }

    /// Sets the message type.
    pub fn set_message_type(&mut self, message_type: MessageType) {
        self.set_simple(Attribute::MsgType, message_type.as_str());
    }

    /// Returns the message sub-type.
    #[must_use]
    pub fn message_subtype(&self) -> Option<&str> {
        self.simple(Attribute::MsgSubtype)
    }

    /// Sets the message sub-type.
    pub fn set_message_subtype(&mut self, subtype: impl Into<String>) {
        self.set_simple(Attribute::MsgSubtype, subtype);
    }

    /// Returns the lifecycle tag.
    ///
    /// Unlike every other getter this does not default: silently treating a
    /// corrupted tag as `New` would hide damaged persisted state.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::MalformedLifecycleTag`] when no tag is stored or
    /// the stored value names no known state.
    pub fn message_state(&self) -> Result<MessageState, MessageError> {
        let raw = self.simple(Attribute::MsgState);
        raw.and_then(|value| MessageState::try_from(value).ok())
            .ok_or_else(|| MessageError::malformed_lifecycle_tag(self.message_id(), raw))
    }

    /// Sets the lifecycle tag, stored lowercase.
    pub fn set_message_state(&mut self, state: MessageState) {
        self.set_simple(Attribute::MsgState, state.as_str());
    }

    /// Returns the session id of the sender.
    #[must_use]
    pub fn src_session_id(&self) -> Option<&str> {
        self.simple(Attribute::SrcSessionId)
    }

    /// Sets the session id of the sender.
    pub fn set_src_session_id(&mut self, session_id: impl Into<String>) {
        self.set_simple(Attribute::SrcSessionId, session_id);
    }

    /// Returns the session id the message is addressed to.
    #[must_use]
    pub fn tgt_session_id(&self) -> Option<&str> {
        self.simple(Attribute::TgtSessionId)
    }

    /// Sets the session id the message is addressed to.
    pub fn set_tgt_session_id(&mut self, session_id: impl Into<String>) {
        self.set_simple(Attribute::TgtSessionId, session_id);
    }

    /// Returns the session id under which the message executes.
    #[must_use]
    pub fn execution_session_id(&self) -> Option<&str> {
        self.simple(Attribute::ExeSessionId)
    }

    /// Sets the session id under which the message executes.
    pub fn set_execution_session_id(&mut self, session_id: impl Into<String>) {
        self.set_simple(Attribute::ExeSessionId, session_id);
    }

    /// Returns the sender's instance name.
    #[must_use]
    pub fn src_name(&self) -> Option<&str> {
        self.simple(Attribute::SrcName)
    }

    /// Sets the sender's instance name.
    pub fn set_src_name(&mut self, name: impl Into<String>) {
        self.set_simple(Attribute::SrcName, name);
    }

    /// Returns the sender's role, [`InstanceType::Participant`] when absent
    /// or unreadable.
    #[must_use]
    pub fn src_instance_type(&self) -> InstanceType {
        self.record
            .enum_field(Attribute::SrcInstanceType.as_str(), InstanceType::Participant)
    }

    /// Sets the sender's role.
    pub fn set_src_instance_type(&mut self, instance_type: InstanceType) {
        self.record
            .set_enum_field(Attribute::SrcInstanceType.as_str(), &instance_type);
    }

    /// Returns the target instance name.
    #[must_use]
    pub fn tgt_name(&self) -> Option<&str> {
        self.simple(Attribute::TgtName)
    }

    /// Sets the target instance name.
    pub fn set_tgt_name(&mut self, name: impl Into<String>) {
        self.set_simple(Attribute::TgtName, name);
    }

    /// Returns `true` when the target name is `controller`, ignoring case.
    ///
    /// A message without a target name is not a controller message.
    #[must_use]
    pub fn is_controller_message(&self) -> bool {
        self.tgt_name()
            .is_some_and(|name| name.eq_ignore_ascii_case("controller"))
    }

    /// Returns the single partition name.
    #[must_use]
    pub fn partition_name(&self) -> Option<&str> {
        self.simple(Attribute::PartitionName)
    }

    /// Sets the single partition name.
    pub fn set_partition_name(&mut self, partition: impl Into<String>) {
        self.set_simple(Attribute::PartitionName, partition);
    }

    /// Appends a partition to the grouped partition list unless present.
    ///
    /// Insertion order is preserved and duplicates are ignored.
    pub fn add_partition_name(&mut self, partition: &str) {
        let partitions = self
            .record
            .list_field_entry(Attribute::PartitionName.as_str());
        if !partitions.iter().any(|existing| existing == partition) {
            partitions.push(partition.to_owned());
        }
    }

    /// Returns the grouped partition list, empty when never populated.
    #[must_use]
    pub fn partition_names(&self) -> &[String] {
        self.record
            .list_field(Attribute::PartitionName.as_str())
            .unwrap_or_default()
    }

    /// Returns the resource name.
    #[must_use]
    pub fn resource_name(&self) -> Option<&str> {
        self.simple(Attribute::ResourceName)
    }

    /// Sets the resource name.
    pub fn set_resource_name(&mut self, resource: impl Into<String>) {
        self.set_simple(Attribute::ResourceName, resource);
    }

    /// Returns the state the partition transitions from.
    #[must_use]
    pub fn from_state(&self) -> Option<&str> {
        self.simple(Attribute::FromState)
    }

    /// Sets the state the partition transitions from.
    pub fn set_from_state(&mut self, state: impl Into<String>) {
        self.set_simple(Attribute::FromState, state);
    }

    /// Returns the state the partition transitions to.
    #[must_use]
    pub fn to_state(&self) -> Option<&str> {
        self.simple(Attribute::ToState)
    }

    /// Sets the state the partition transitions to.
    pub fn set_to_state(&mut self, state: impl Into<String>) {
        self.set_simple(Attribute::ToState, state);
    }

    /// Returns the state-model definition name.
    #[must_use]
    pub fn state_model_def(&self) -> Option<&str> {
        self.simple(Attribute::StateModelDef)
    }

    /// Sets the state-model definition name.
    pub fn set_state_model_def(&mut self, name: impl Into<String>) {
        self.set_simple(Attribute::StateModelDef, name);
    }

    /// Returns the state-model factory name.
    #[must_use]
    pub fn state_model_factory_name(&self) -> Option<&str> {
        self.simple(Attribute::StateModelFactoryName)
    }

    /// Sets the state-model factory name.
    pub fn set_state_model_factory_name(&mut self, name: impl Into<String>) {
        self.set_simple(Attribute::StateModelFactoryName, name);
    }

    /// Returns the creation time in epoch milliseconds, `0` when absent.
    #[must_use]
    pub fn create_timestamp(&self) -> i64 {
        self.record
            .long_field(Attribute::CreateTimestamp.as_str(), 0)
    }

    /// Overrides the creation time in epoch milliseconds.
    pub fn set_create_timestamp(&mut self, millis: i64) {
        self.record
            .set_long_field(Attribute::CreateTimestamp.as_str(), millis);
    }

    /// Returns the creation time, `None` when unset or out of range.
    #[must_use]
    pub fn create_time(&self) -> Option<DateTime<Utc>> {
        match self.create_timestamp() {
            0 => None,
            millis => DateTime::from_timestamp_millis(millis),
        }
    }

    /// Returns the read time in epoch milliseconds, `0` when absent.
    #[must_use]
    pub fn read_timestamp(&self) -> i64 {
        self.record.long_field(Attribute::ReadTimestamp.as_str(), 0)
    }

    /// Sets the read time in epoch milliseconds.
    pub fn set_read_timestamp(&mut self, millis: i64) {
        self.record
            .set_long_field(Attribute::ReadTimestamp.as_str(), millis);
    }

    /// Returns the execution start time in epoch milliseconds, `0` when absent.
    #[must_use]
    pub fn execute_start_timestamp(&self) -> i64 {
        self.record
            .long_field(Attribute::ExecuteStartTimestamp.as_str(), 0)
    }

    /// Sets the execution start time in epoch milliseconds.
    pub fn set_execute_start_timestamp(&mut self, millis: i64) {
        self.record
            .set_long_field(Attribute::ExecuteStartTimestamp.as_str(), millis);
    }

    /// Returns the advisory execution timeout in milliseconds.
    ///
    /// [`DEFAULT_EXECUTION_TIMEOUT`] means no timeout. The value is never
    /// enforced here.
    #[must_use]
    pub fn execution_timeout(&self) -> i32 {
        self.record
            .int_field(Attribute::Timeout.as_str(), DEFAULT_EXECUTION_TIMEOUT)
    }

    /// Sets the advisory execution timeout in milliseconds.
    pub fn set_execution_timeout(&mut self, timeout: i32) {
        self.record.set_int_field(Attribute::Timeout.as_str(), timeout);
    }

    /// Returns the retry count, `0` when absent.
    #[must_use]
    pub fn retry_count(&self) -> i32 {
        self.record.int_field(Attribute::RetryCount.as_str(), 0)
    }

    /// Sets the retry count.
    pub fn set_retry_count(&mut self, retries: i32) {
        self.record
            .set_int_field(Attribute::RetryCount.as_str(), retries);
    }

    /// Returns the correlation id linking a request to its reply.
    #[must_use]
    pub fn correlation_id(&self) -> Option<&str> {
        self.simple(Attribute::CorrelationId)
    }

    /// Sets the correlation id.
    pub fn set_correlation_id(&mut self, correlation_id: impl Into<String>) {
        self.set_simple(Attribute::CorrelationId, correlation_id);
    }

    /// Returns the result mapping carried by a reply.
    #[must_use]
    pub fn result_map(&self) -> Option<&FieldMap> {
        self.record.map_field(Attribute::MessageResult.as_str())
    }

    /// Sets the result mapping.
    pub fn set_result_map(&mut self, results: FieldMap) {
        self.record
            .set_map_field(Attribute::MessageResult.as_str(), results);
    }

    /// Sets the chunking hint. Values of zero or below are not stored.
    pub fn set_bucket_size(&mut self, bucket_size: i32) {
        if bucket_size > 0 {
            self.record
                .set_int_field(Attribute::BucketSize.as_str(), bucket_size);
        }
    }

    /// Returns the identifier of the group message this one was split from.
    #[must_use]
    pub fn parent_msg_id(&self) -> Option<&str> {
        self.simple(Attribute::ParentMsgId)
    }

    /// Sets the identifier of the parent group message.
    pub fn set_parent_msg_id(&mut self, parent: &MessageId) {
        self.set_simple(Attribute::ParentMsgId, parent.as_str());
    }

    /// Decodes the enveloped inner message, if any.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::MalformedInnerMessage`] when the stored payload
    /// is not an encoded record.
    pub fn inner_message(&self) -> Result<Option<Record>, MessageError> {
        self.simple(Attribute::InnerMessage)
            .map(|payload| {
                Record::from_json(payload).map_err(|err| {
                    MessageError::malformed_inner_message(self.message_id(), err.to_string())
                })
            })
            .transpose()
    }

    /// Encodes `inner` as this message's envelope payload.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::MalformedInnerMessage`] if encoding fails.
    pub fn set_inner_message(&mut self, inner: &Record) -> Result<(), MessageError> {
        let payload = inner
            .to_json()
            .map_err(|err| {
                MessageError::malformed_inner_message(self.message_id(), err.to_string())
            })?;
        self.set_simple(Attribute::InnerMessage, payload);
        Ok(())
    }

    /// Reads a field by its attribute key.
    #[must_use]
    pub fn attribute(&self, attribute: Attribute) -> Option<&str> {
        self.simple(attribute)
    }

    /// Writes a field by its attribute key.
    ///
    /// Writing [`Attribute::MsgId`] this way is outside the message contract:
    /// the identifier is fixed at construction, and re-keying goes through
    /// [`Message::from_record_with_id`].
    pub fn set_attribute(&mut self, attribute: Attribute, value: impl Into<String>) {
        self.set_simple(attribute, value);
    }

    /// Reads a scalar field by raw key, including keys with no attribute.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.record.simple_field(key)
    }

    /// Writes a scalar field by raw key, including keys with no attribute.
    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.record.set_simple_field(key, value);
    }
}

impl Property for Message {
    fn record(&self) -> &Record {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    fn into_record(self) -> Record {
        self.record
    }

    /// Checks the fields a state transition cannot run without.
    ///
    /// Target name, partition name, resource name, state-model definition,
    /// to-state, state-model factory name and from-state must all be present
    /// and not blank. Other message types are always valid.
    fn is_valid(&self) -> bool {
        if self.message_type_name() != Some(MessageType::StateTransition.as_str()) {
            return true;
        }
        [
            self.tgt_name(),
            self.partition_name(),
            self.resource_name(),
            self.state_model_def(),
            self.to_state(),
            self.state_model_factory_name(),
            self.from_state(),
        ]
        .into_iter()
        .all(is_present)
    }

    fn bucket_size(&self) -> i32 {
        self.record.int_field(Attribute::BucketSize.as_str(), 0)
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.trim().is_empty())
}

fn now_millis(clock: &impl Clock) -> i64 {
    clock.utc().timestamp_millis()
}

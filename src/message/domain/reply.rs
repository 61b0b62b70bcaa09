//! Derivation of task replies from request messages.

use super::{
    CONTROLLER_NAME, InstanceType, Message, MessageId, MessageState, MessageType,
    WILDCARD_SESSION_ID,
};
use crate::message::error::MessageError;
use crate::record::FieldMap;
use mockable::Clock;

impl Message {
    /// Builds a [`MessageType::TaskReply`] answering `source`.
    ///
    /// The reply is an independent message with a fresh identifier. Only the
    /// correlation id is copied from `source`. The reply targets any session
    /// of the requester: the controller when `source` came from a controller,
    /// otherwise the instance named as the source's sender. A source without
    /// a sender name yields a reply without a target name.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::CorrelationMissing`] if `source` carries no
    /// correlation id.
    ///
    /// # Examples
    ///
    /// ```
    /// use cluster_message::message::domain::{Message, MessageType};
    /// use cluster_message::record::FieldMap;
    /// use mockable::DefaultClock;
    ///
    /// let clock = DefaultClock;
    /// let mut request = Message::new(MessageType::UserDefine, "req-1", &clock);
    /// request.set_correlation_id("abc");
    /// request.set_src_name("localhost_12918");
    ///
    /// let reply = Message::create_reply(&request, "localhost_12919", FieldMap::new(), &clock)
    ///     .expect("request is correlated");
    /// assert_eq!(reply.correlation_id(), Some("abc"));
    /// assert_eq!(reply.tgt_name(), Some("localhost_12918"));
    /// ```
    pub fn create_reply(
        source: &Self,
        replier_instance: &str,
        results: FieldMap,
        clock: &impl Clock,
    ) -> Result<Self, MessageError> {
        let correlation_id = source
            .correlation_id()
            .ok_or_else(|| MessageError::correlation_missing(source.message_id()))?;

        let mut reply = Self::new(MessageType::TaskReply, MessageId::new(), clock);
        reply.set_correlation_id(correlation_id);
        reply.set_result_map(results);
        reply.set_tgt_session_id(WILDCARD_SESSION_ID);
        reply.set_message_state(MessageState::New);
        reply.set_src_name(replier_instance);

        let target = match source.src_instance_type() {
            InstanceType::Controller => Some(CONTROLLER_NAME),
            _ => source.src_name(),
        };
        if let Some(name) = target {
            reply.set_tgt_name(name);
        }

        tracing::debug!(
            source_id = %source.message_id(),
            reply_id = %reply.message_id(),
            correlation_id,
            "derived task reply"
        );
        Ok(reply)
    }
}

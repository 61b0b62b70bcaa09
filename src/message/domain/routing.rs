//! Resolution of a message's storage key.

use super::Message;
use crate::message::ports::key_builder::{KeyBuilder, PropertyKey};

impl Message {
    /// Resolves the path under which this message is stored and delivered.
    ///
    /// Controller-addressed messages resolve through
    /// [`KeyBuilder::controller_message`]; everything else resolves into the
    /// mailbox of `instance_name` through [`KeyBuilder::message`].
    #[must_use]
    pub fn key<B>(&self, builder: &B, instance_name: &str) -> PropertyKey
    where
        B: KeyBuilder + ?Sized,
    {
        let id = self.message_id();
        if self.is_controller_message() {
            builder.controller_message(&id)
        } else {
            builder.message(instance_name, &id)
        }
    }
}

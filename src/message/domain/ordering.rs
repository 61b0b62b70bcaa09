//! Creation-time ordering of pending messages.

use super::Message;
use std::cmp::Ordering;

/// Orders messages by creation timestamp, oldest first.
///
/// Messages created in the same millisecond compare equal.
#[must_use]
pub fn compare_create_time(left: &Message, right: &Message) -> Ordering {
    left.create_timestamp().cmp(&right.create_timestamp())
}

/// Sorts pending messages oldest first.
///
/// The sort is stable, so messages sharing a creation timestamp keep their
/// relative input order.
pub fn sort_by_create_time(messages: &mut [Message]) {
    messages.sort_by(compare_create_time);
}

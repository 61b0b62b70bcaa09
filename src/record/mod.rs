//! Generic versioned record backing every cluster property.
//!
//! A [`Record`] is an identifier plus three independent field namespaces:
//! scalar strings, ordered string lists, and string-to-string maps. Typed
//! entities such as [`crate::message::domain::Message`] wrap a record through
//! the [`Property`] facade rather than storing their own fields.

mod error;
mod property;
mod versioned;

pub use error::RecordError;
pub use property::Property;
pub use versioned::{FieldMap, Record};

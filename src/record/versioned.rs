//! The generic versioned record.

use super::RecordError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

/// An ordered string-to-string mapping stored in a record map field.
pub type FieldMap = BTreeMap<String, String>;

const UNVERSIONED: i32 = -1;

/// An identified bag of fields persisted by the coordination store.
///
/// Scalar, list and map fields live in separate namespaces, so one key may
/// hold a scalar and a list at the same time. The version is storage
/// metadata and is not part of the JSON form.
///
/// # Examples
///
/// ```
/// use cluster_message::record::Record;
///
/// let mut record = Record::new("msg-1");
/// record.set_long_field("CREATE_TIMESTAMP", 1_700_000_000_000);
/// assert_eq!(record.long_field("CREATE_TIMESTAMP", 0), 1_700_000_000_000);
/// assert_eq!(record.long_field("READ_TIMESTAMP", 0), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    id: String,

    #[serde(default)]
    simple_fields: BTreeMap<String, String>,

    #[serde(default)]
    list_fields: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    map_fields: BTreeMap<String, FieldMap>,

    #[serde(skip, default = "unversioned")]
    version: i32,
}

const fn unversioned() -> i32 {
    UNVERSIONED
}

impl Record {
    /// Creates an empty, unversioned record.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            simple_fields: BTreeMap::new(),
            list_fields: BTreeMap::new(),
            map_fields: BTreeMap::new(),
            version: UNVERSIONED,
        }
    }

    /// Copies every field of `other` under a new identifier.
    ///
    /// The copy is independent of the source and keeps its version.
    #[must_use]
    pub fn with_id(other: &Self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..other.clone()
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the storage version, `-1` when never persisted.
    #[must_use]
    pub const fn version(&self) -> i32 {
        self.version
    }

    /// Sets the storage version.
    pub const fn set_version(&mut self, version: i32) {
        self.version = version;
    }

    /// Returns a scalar field.
    #[must_use]
    pub fn simple_field(&self, key: &str) -> Option<&str> {
        self.simple_fields.get(key).map(String::as_str)
    }

    /// Sets a scalar field, replacing any previous value.
    pub fn set_simple_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.simple_fields.insert(key.into(), value.into());
    }

    /// Removes a scalar field, returning its previous value.
    pub fn remove_simple_field(&mut self, key: &str) -> Option<String> {
        self.simple_fields.remove(key)
    }

    /// Returns all scalar fields.
    #[must_use]
    pub const fn simple_fields(&self) -> &BTreeMap<String, String> {
        &self.simple_fields
    }

    /// Reads a scalar field as a 64-bit integer.
    ///
    /// Returns `default` when the field is absent or does not parse.
    #[must_use]
    pub fn long_field(&self, key: &str, default: i64) -> i64 {
        self.parsed_field(key, default)
    }

    /// Stores a 64-bit integer in a scalar field.
    pub fn set_long_field(&mut self, key: impl Into<String>, value: i64) {
        self.set_simple_field(key, value.to_string());
    }

    /// Reads a scalar field as a 32-bit integer.
    ///
    /// Returns `default` when the field is absent or does not parse.
    #[must_use]
    pub fn int_field(&self, key: &str, default: i32) -> i32 {
        self.parsed_field(key, default)
    }

    /// Stores a 32-bit integer in a scalar field.
    pub fn set_int_field(&mut self, key: impl Into<String>, value: i32) {
        self.set_simple_field(key, value.to_string());
    }

    /// Reads a scalar field as an enumerated value by its symbolic name.
    ///
    /// Returns `default` when the field is absent or names no variant.
    #[must_use]
    pub fn enum_field<T: FromStr>(&self, key: &str, default: T) -> T {
        self.parsed_field(key, default)
    }

    /// Stores an enumerated value under its symbolic name.
    pub fn set_enum_field<T: Display>(&mut self, key: impl Into<String>, value: &T) {
        self.set_simple_field(key, value.to_string());
    }

    fn parsed_field<T: FromStr>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.simple_field(key) else {
            return default;
        };
        raw.parse().unwrap_or_else(|_| {
            tracing::warn!(
                record_id = %self.id,
                field = key,
                value = raw,
                "unparseable field value, using default"
            );
            default
        })
    }

    /// Returns a list field.
    #[must_use]
    pub fn list_field(&self, key: &str) -> Option<&[String]> {
        self.list_fields.get(key).map(Vec::as_slice)
    }

    /// Sets a list field, replacing any previous value.
    pub fn set_list_field(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.list_fields.insert(key.into(), values);
    }

    /// Returns a list field for mutation, creating an empty list if absent.
    pub fn list_field_entry(&mut self, key: impl Into<String>) -> &mut Vec<String> {
        self.list_fields.entry(key.into()).or_default()
    }

    /// Returns a map field.
    #[must_use]
    pub fn map_field(&self, key: &str) -> Option<&FieldMap> {
        self.map_fields.get(key)
    }

    /// Sets a map field, replacing any previous value.
    pub fn set_map_field(&mut self, key: impl Into<String>, values: FieldMap) {
        self.map_fields.insert(key.into(), values);
    }

    /// Encodes the record as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a record from JSON. The result is unversioned.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Serialization`] if the payload is not a record.
    pub fn from_json(payload: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(payload)?)
    }
}

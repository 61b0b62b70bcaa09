//! Typed facade over a [`Record`].

use super::Record;

/// A typed view over exactly one owned [`Record`].
///
/// Implementors own their record; no two live properties share one.
pub trait Property {
    /// Returns the backing record.
    fn record(&self) -> &Record;

    /// Returns the backing record for mutation.
    fn record_mut(&mut self) -> &mut Record;

    /// Consumes the property and returns its backing record.
    fn into_record(self) -> Record
    where
        Self: Sized;

    /// Returns the record identifier.
    fn id(&self) -> &str {
        self.record().id()
    }

    /// Returns the storage version of the backing record.
    fn version(&self) -> i32 {
        self.record().version()
    }

    /// Reports whether the property carries everything it needs.
    ///
    /// Properties without structural requirements are always valid.
    fn is_valid(&self) -> bool {
        true
    }

    /// Returns the chunking hint for large payloads, `0` when unset.
    fn bucket_size(&self) -> i32 {
        0
    }
}

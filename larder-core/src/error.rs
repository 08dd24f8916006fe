//! Errors surfaced by the grocery and meal plan managers.

use chrono::NaiveDate;

use crate::store::StoreError;

/// A failure to load or persist a whole document.
///
/// None of these are fatal: the managers stay usable and the caller decides
/// whether to retry, notify, or carry on with the in-memory state.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The store could not be read.
    #[error("Storage read failed: {0}")]
    StorageRead(#[source] StoreError),

    /// The stored document does not match its schema.
    #[error("Stored '{key}' document is invalid: {source}")]
    Deserialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory state could not be encoded.
    #[error("Failed to encode '{key}' document: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The store rejected the write.
    #[error("Storage write failed: {0}")]
    StorageWrite(#[source] StoreError),

    /// The date has no `YYYY-MM-DD` key, so nothing was written.
    #[error("Date {0} cannot be stored. Years must be 0000 to 9999.")]
    DateOutOfRange(NaiveDate),
}

impl PersistError {
    /// True if the stored document exists but could not be parsed.
    pub fn is_corrupt_document(&self) -> bool {
        matches!(self, PersistError::Deserialization { .. })
    }
}

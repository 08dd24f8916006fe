//! String-keyed document storage.
//!
//! The store is the only durable state. Each key holds one whole document;
//! writes replace the document, there are no partial updates.
//!
//! Two implementations are provided:
//! - [`FileStore`]: one `<key>.json` file per key in a data directory
//! - [`MemoryStore`]: in-process map, for tests and throwaway sessions

#[cfg(test)]
pub(crate) mod failing;
mod file;
mod memory;

use async_trait::async_trait;
use std::io;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Store key of the grocery list document.
pub const GROCERY_ITEMS_KEY: &str = "groceryItems";

/// Store key of the meal plan document.
pub const MEAL_PLAN_KEY: &str = "mealPlan";

/// Asynchronous get/set by key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the document under `key`.
    ///
    /// Returns `Ok(None)` if nothing has been stored under the key.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the document under `key`.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Errors raised by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub fn key(&self) -> &str {
        match self {
            StoreError::Read { key, .. } | StoreError::Write { key, .. } => key,
        }
    }
}

//! Whole-document JSON reads and writes against a [`KeyValueStore`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::PersistError;
use crate::store::KeyValueStore;

/// Read and decode the document under `key`.
///
/// Returns `Ok(None)` if the key has never been written or holds only
/// whitespace.
pub(crate) async fn load_json<S, T>(store: &S, key: &str) -> Result<Option<T>, PersistError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let contents = match store.get_item(key).await {
        Ok(Some(contents)) if !contents.trim().is_empty() => contents,
        Ok(_) => {
            tracing::debug!(key, "no stored document");
            return Ok(None);
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read document");
            return Err(PersistError::StorageRead(e));
        }
    };

    serde_json::from_str(&contents).map(Some).map_err(|source| {
        tracing::warn!(key, error = %source, "stored document is invalid");
        PersistError::Deserialization {
            key: key.to_string(),
            source,
        }
    })
}

/// Encode `value` and replace the document under `key`.
pub(crate) async fn save_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), PersistError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let contents = serde_json::to_string(value).map_err(|source| {
        tracing::warn!(key, error = %source, "failed to encode document");
        PersistError::Serialization {
            key: key.to_string(),
            source,
        }
    })?;

    store.set_item(key, &contents).await.map_err(|e| {
        tracing::warn!(key, error = %e, "failed to write document");
        PersistError::StorageWrite(e)
    })?;

    tracing::debug!(key, bytes = contents.len(), "persisted document");
    Ok(())
}

//! Directory-backed document store.
//!
//! Storage layout:
//! ```text
//! ~/.local/share/larder/
//! ├── groceryItems.json
//! └── mealPlan.json
//! ```

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::{KeyValueStore, StoreError};

/// File extension for stored documents.
const DOC_EXTENSION: &str = "json";

/// Suffix of the scratch file a write goes through before the rename.
const TEMP_SUFFIX: &str = "tmp";

/// Stores each key as a JSON file in a data directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `data_dir`. The directory is created on first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the full path for a key.
    pub fn path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", key, DOC_EXTENSION))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}.{}", key, DOC_EXTENSION, TEMP_SUFFIX))
    }
}

fn check_key(key: &str) -> io::Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid store key '{}'", key),
        ))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let read_err = |source| StoreError::Read {
            key: key.to_string(),
            source,
        };
        check_key(key).map_err(read_err)?;

        match fs::read_to_string(self.path(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(read_err(e)),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            key: key.to_string(),
            source,
        };
        check_key(key).map_err(write_err)?;

        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(write_err)?;

        // readers see either the old document or the new one, never a torn write
        let temp = self.temp_path(key);
        fs::write(&temp, value).await.map_err(write_err)?;
        fs::rename(&temp, self.path(key))
            .await
            .map_err(write_err)?;

        tracing::trace!(key, bytes = value.len(), "stored document");
        Ok(())
    }
}

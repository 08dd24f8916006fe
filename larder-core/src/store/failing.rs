use async_trait::async_trait;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{KeyValueStore, MemoryStore, StoreError};

/// Memory store whose reads and writes can be switched to fail.
#[derive(Debug, Default)]
pub(crate) struct FailingStore {
    inner: MemoryStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FailingStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_item(key: &str, value: &str) -> Self {
        Self {
            inner: MemoryStore::with_item(key, value),
            ..Self::default()
        }
    }

    pub(crate) fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

fn unavailable() -> io::Error {
    io::Error::other("store unavailable")
}

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Read {
                key: key.to_string(),
                source: unavailable(),
            });
        }
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Write {
                key: key.to_string(),
                source: unavailable(),
            });
        }
        self.inner.set_item(key, value).await
    }
}

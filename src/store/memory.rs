//! In-process blob store

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{BlobKey, BlobStore, StoreError};

/// Blob store kept in memory. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: Arc<Mutex<HashMap<BlobKey, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a blob, e.g. with hand-written or corrupted JSON
    pub fn with_blob(self, key: BlobKey, value: impl Into<String>) -> Self {
        if let Ok(mut blobs) = self.blobs.lock() {
            blobs.insert(key, value.into());
        }
        self
    }

    /// Current contents of every written blob
    pub fn snapshot(&self) -> HashMap<BlobKey, String> {
        self.blobs.lock().map(|b| b.clone()).unwrap_or_default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: BlobKey) -> Result<Option<String>, StoreError> {
        let blobs = self.blobs.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(blobs.get(&key).cloned())
    }

    fn put_all(&self, entries: &[(BlobKey, String)]) -> Result<(), StoreError> {
        let mut blobs = self.blobs.lock().map_err(|_| StoreError::LockPoisoned)?;
        for (key, value) in entries {
            blobs.insert(*key, value.clone());
        }
        Ok(())
    }
}

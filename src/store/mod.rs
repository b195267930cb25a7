//! Keyed JSON blob storage
//!
//! All persisted state is a handful of independent JSON documents, each under a
//! fixed key. Backends only move strings around; parsing and fail-soft recovery
//! live in [`Repository`].
//!
//! # Backends
//!
//! ```text
//! json    <data_dir>/<key>.json   one file per blob, atomic rename on write
//! sqlite  <data_dir>/ecotrack.db  blobs table, one transaction per put_all
//! memory  in-process only (tests)
//! ```

mod json;
mod lock;
mod memory;
mod repository;
mod sqlite;

pub use json::JsonDirStore;
pub use lock::DataDirLock;
pub use memory::MemoryStore;
pub use repository::{LoadedState, Repository, Snapshot};
pub use sqlite::SqliteStore;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Storage key of each persisted blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlobKey {
    WasteLogs,
    UserStats,
    Achievements,
    UserPoints,
    CollectionSchedule,
}

impl BlobKey {
    pub const ALL: [BlobKey; 5] = [
        Self::WasteLogs,
        Self::UserStats,
        Self::Achievements,
        Self::UserPoints,
        Self::CollectionSchedule,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WasteLogs => "wasteLogs",
            Self::UserStats => "userStats",
            Self::Achievements => "achievements",
            Self::UserPoints => "userPoints",
            Self::CollectionSchedule => "collectionSchedule",
        }
    }
}

/// Error type for storage backends
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    LockPoisoned,

    #[error("Data directory {0} is locked by another ecotrack process")]
    Busy(PathBuf),
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A keyed store of JSON text blobs
pub trait BlobStore {
    /// Read a blob. `Ok(None)` if it was never written.
    fn get(&self, key: BlobKey) -> Result<Option<String>, StoreError>;

    /// Write several blobs together. Backends that can, write them atomically.
    fn put_all(&self, entries: &[(BlobKey, String)]) -> Result<(), StoreError>;

    fn put(&self, key: BlobKey, value: String) -> Result<(), StoreError> {
        self.put_all(&[(key, value)])
    }
}

impl<T: BlobStore + ?Sized> BlobStore for Box<T> {
    fn get(&self, key: BlobKey) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn put_all(&self, entries: &[(BlobKey, String)]) -> Result<(), StoreError> {
        (**self).put_all(entries)
    }
}

impl<T: BlobStore + ?Sized> BlobStore for &T {
    fn get(&self, key: BlobKey) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn put_all(&self, entries: &[(BlobKey, String)]) -> Result<(), StoreError> {
        (**self).put_all(entries)
    }
}

/// Which backend to persist to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Json,
    Sqlite,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Sqlite => "sqlite",
        }
    }
}

/// Open the configured backend rooted at `data_dir`
pub fn open_store(backend: StorageBackend, data_dir: &Path) -> Result<Box<dyn BlobStore>, StoreError> {
    tracing::debug!(backend = backend.as_str(), dir = %data_dir.display(), "Opening blob store");
    match backend {
        StorageBackend::Json => Ok(Box::new(JsonDirStore::open(data_dir)?)),
        StorageBackend::Sqlite => Ok(Box::new(SqliteStore::open(&data_dir.join("ecotrack.db"))?)),
    }
}

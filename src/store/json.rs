//! One JSON file per blob

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{BlobKey, BlobStore, StoreError};

/// Stores each blob as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    /// Open (and create if needed) a store directory
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn path_for(&self, key: BlobKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }

    /// Write to a temp file and rename over the target
    fn write_atomic(path: &Path, content: &str) -> Result<(), StoreError> {
        let temp_path = path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| StoreError::io(&temp_path, e))?;

        temp_file
            .write_all(content.as_bytes())
            .and_then(|_| temp_file.sync_all())
            .map_err(|e| StoreError::io(&temp_path, e))?;

        fs::rename(&temp_path, path).map_err(|e| StoreError::io(path, e))
    }
}

impl BlobStore for JsonDirStore {
    fn get(&self, key: BlobKey) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(&path, e)),
        }
    }

    fn put_all(&self, entries: &[(BlobKey, String)]) -> Result<(), StoreError> {
        for (key, value) in entries {
            Self::write_atomic(&self.path_for(*key), value)?;
        }
        tracing::debug!(blobs = entries.len(), dir = %self.dir.display(), "Wrote JSON blobs");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_blob_is_none() {
        let dir = tempdir().unwrap();
        let store = JsonDirStore::open(dir.path()).unwrap();
        assert_eq!(store.get(BlobKey::WasteLogs).unwrap(), None);
    }

    #[test]
    fn test_put_and_get() {
        let dir = tempdir().unwrap();
        let store = JsonDirStore::open(&dir.path().join("nested")).unwrap();
        store
            .put_all(&[
                (BlobKey::Achievements, r#"["first_log"]"#.to_string()),
                (BlobKey::UserPoints, r#"{"points":10,"level":1}"#.to_string()),
            ])
            .unwrap();

        assert_eq!(
            store.get(BlobKey::Achievements).unwrap().as_deref(),
            Some(r#"["first_log"]"#)
        );
        assert!(store.path_for(BlobKey::UserPoints).ends_with("userPoints.json"));
        assert!(!dir.path().join("nested/userPoints.json.tmp").exists());
    }
}

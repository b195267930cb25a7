//! Advisory lock over a data directory

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::StoreError;

const LOCK_FILE: &str = "ecotrack.lock";

/// Exclusive lock on `<data_dir>/ecotrack.lock`, released on drop.
///
/// Mutating commands hold it for the whole load/modify/save cycle so two
/// processes never interleave writes to the same data directory.
#[derive(Debug)]
pub struct DataDirLock {
    file: File,
    path: PathBuf,
}

impl DataDirLock {
    /// Block until the lock is available
    pub fn acquire(data_dir: &Path) -> Result<Self, StoreError> {
        let (file, path) = Self::open(data_dir)?;
        file.lock_exclusive().map_err(|e| StoreError::io(&path, e))?;
        tracing::debug!(path = %path.display(), "Acquired data directory lock");
        Ok(Self { file, path })
    }

    /// Fail with [`StoreError::Busy`] instead of waiting
    pub fn try_acquire(data_dir: &Path) -> Result<Self, StoreError> {
        let (file, path) = Self::open(data_dir)?;
        file.try_lock_exclusive()
            .map_err(|_| StoreError::Busy(data_dir.to_path_buf()))?;
        Ok(Self { file, path })
    }

    fn open(data_dir: &Path) -> Result<(File, PathBuf), StoreError> {
        std::fs::create_dir_all(data_dir).map_err(|e| StoreError::io(data_dir, e))?;
        let path = data_dir.join(LOCK_FILE);
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| StoreError::io(&path, e))?;
        Ok((file, path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for DataDirLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            tracing::warn!(path = %self.path.display(), "Failed to release lock: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_second_lock_is_busy() {
        let dir = tempdir().unwrap();
        let held = DataDirLock::acquire(dir.path()).unwrap();
        assert!(held.path().ends_with(LOCK_FILE));

        assert!(matches!(
            DataDirLock::try_acquire(dir.path()),
            Err(StoreError::Busy(_))
        ));

        drop(held);
        assert!(DataDirLock::try_acquire(dir.path()).is_ok());
    }
}

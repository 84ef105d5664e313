//! FileSnapshotStore - file-per-key slot store that survives process restarts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{SnapshotError, SnapshotStore};

/// Snapshot store persisting each key to `<dir>/<key>.json`.
///
/// This is the durable analog of a browser's localStorage: the directory
/// outlives the process, so a cart session picks up where the previous one
/// left off. Keys are restricted to `[A-Za-z0-9._-]` to keep the key-to-path
/// mapping injective and inside the base directory.
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, SnapshotError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(SnapshotError::Storage(format!(
                "invalid snapshot key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn read(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SnapshotError::Storage(err.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SnapshotError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|err| SnapshotError::Storage(err.to_string()))?;
        fs::write(&path, value).map_err(|err| SnapshotError::Storage(err.to_string()))
    }

    fn remove(&self, key: &str) -> Result<bool, SnapshotError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(SnapshotError::Storage(err.to_string())),
        }
    }
}

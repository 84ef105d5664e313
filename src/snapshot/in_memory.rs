//! InMemorySnapshotStore - HashMap-backed slot store for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{SnapshotError, SnapshotStore};

/// In-memory snapshot store backed by a HashMap.
///
/// Clone-friendly via Arc: clones share the same storage, so a clone handed
/// to a session observes writes made through the original.
#[derive(Clone)]
pub struct InMemorySnapshotStore {
    storage: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for InMemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySnapshotStore {
    /// Create a new empty snapshot store.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn read(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| SnapshotError::Storage("lock poisoned".into()))?;

        Ok(storage.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SnapshotError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| SnapshotError::Storage("lock poisoned".into()))?;

        storage.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, SnapshotError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| SnapshotError::Storage("lock poisoned".into()))?;

        Ok(storage.remove(key).is_some())
    }
}

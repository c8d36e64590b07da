//! Key/value storage backends for persisted preferences.
//!
//! The store only needs three operations, modelled on a browser's local
//! storage: read a string by key, write a string by key, remove a key.

use crate::error::{PreferencesError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;
use tracing::debug;

/// String key/value storage.
///
/// `Send + Sync` so a store (and the session that owns it) can move
/// between threads.
pub trait StorageBackend: Send + Sync {
    /// Returns the stored value, or `None` if the key was never written
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// In-memory storage.
///
/// Clones share the same map, so a test can hand one clone to a store and
/// keep another to look at what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut items) = storage.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
        storage
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| PreferencesError::Backend("memory storage lock poisoned".to_string()))
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// File-backed storage: one `<key>.json` file per key inside a directory.
///
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where the value for `key` lives on disk
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);

        // Write beside the target and rename over it, so readers never see
        // a half-written blob
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_shares_state_between_clones() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();

        storage.set_item("k", "v").unwrap();
        assert_eq!(handle.get_item("k").unwrap().as_deref(), Some("v"));

        handle.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), None);
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));

        assert_eq!(storage.get_item("prefs").unwrap(), None);

        storage.set_item("prefs", "{\"watchlist\":[1]}").unwrap();
        assert!(storage.path_for("prefs").exists());
        assert_eq!(
            storage.get_item("prefs").unwrap().as_deref(),
            Some("{\"watchlist\":[1]}")
        );

        storage.remove_item("prefs").unwrap();
        storage.remove_item("prefs").unwrap();
        assert_eq!(storage.get_item("prefs").unwrap(), None);
    }

    #[test]
    fn test_file_storage_overwrite_leaves_only_target() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.set_item("prefs", "{\"watchlist\":[1,2,3]}").unwrap();
        storage.set_item("prefs", "{}").unwrap();
        assert_eq!(storage.get_item("prefs").unwrap().as_deref(), Some("{}"));

        let entries: Vec<PathBuf> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(entries, vec![storage.path_for("prefs")]);
    }
}

//! JSON-file key-value store.
//!
//! All keys live in one JSON object on disk. Writes go to a sibling temp file
//! that is renamed over the original, so an interrupted write never leaves a
//! half-written store behind.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ludoteca_core::{KeyValueStore, StorageError};

/// [`KeyValueStore`] backed by a JSON object in a file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every entry. A missing file is an empty store.
    fn read_entries(&self) -> Result<BTreeMap<String, String>, String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| format!("{} is not a valid store: {e}", self.path.display())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(format!("{}: {e}", self.path.display())),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), String> {
        let raw = serde_json::to_string_pretty(entries).map_err(|e| e.to_string())?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw).map_err(|e| format!("{}: {e}", tmp.display()))?;
        fs::rename(&tmp, &self.path).map_err(|e| format!("{}: {e}", self.path.display()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut entries = self.read_entries().map_err(|reason| StorageError::Read {
            key: key.to_string(),
            reason,
        })?;
        Ok(entries.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let to_error = |reason| StorageError::Write {
            key: key.to_string(),
            reason,
        };
        let mut entries = self.read_entries().map_err(to_error)?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).map_err(to_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let to_error = |reason| StorageError::Remove {
            key: key.to_string(),
            reason,
        };
        let mut entries = self.read_entries().map_err(to_error)?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries).map_err(to_error)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("store.json"));
        assert_eq!(store.get("cartItems").unwrap(), None);
        assert!(store.remove("cartItems").is_ok());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("store.json"));

        store.set("cartItems", "[]").unwrap();
        store.set("other", "kept").unwrap();
        assert_eq!(store.get("cartItems").unwrap().as_deref(), Some("[]"));

        store.remove("cartItems").unwrap();
        assert_eq!(store.get("cartItems").unwrap(), None);
        assert_eq!(store.get("other").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        FileStore::new(&path).set("cartItems", "[1]").unwrap();
        assert_eq!(
            FileStore::new(&path).get("cartItems").unwrap().as_deref(),
            Some("[1]")
        );
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();
        let store = FileStore::new(&path);

        assert!(matches!(store.get("cartItems"), Err(StorageError::Read { .. })));
        assert!(matches!(
            store.set("cartItems", "[]"),
            Err(StorageError::Write { .. })
        ));
    }
}

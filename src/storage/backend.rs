//! Key-value backends
//!
//! A backend maps string keys to string values, the same contract as a
//! browser's local storage. The record store layers JSON collections on top.

use crate::storage::{get_data_dir, StorageError};
use dashmap::DashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// String-keyed, string-valued persistence.
///
/// Each call is a single synchronous operation; there are no transactions
/// spanning calls.
pub trait KeyValueBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Stores every key as `<key>.json` inside a directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Backend rooted at `<data dir>/store`.
    pub fn in_data_dir() -> Result<Self, StorageError> {
        Ok(Self::new(get_data_dir()?.join("store")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;

        // Write to a temp file first so a crash never leaves a half-written value
        let temp_path = self.root.join(format!("{}.json.tmp", key));
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Wrote key '{}' ({} bytes)", key, value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory backend, used by tests and as a fallback when no data
/// directory is available.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: DashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_backend_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("store"));

        assert_eq!(backend.get("theme").unwrap(), None);

        backend.set("theme", "light").unwrap();
        assert_eq!(backend.get("theme").unwrap().as_deref(), Some("light"));
        assert!(dir.path().join("store").join("theme.json").exists());

        backend.set("theme", "dark").unwrap();
        assert_eq!(backend.get("theme").unwrap().as_deref(), Some("dark"));

        backend.remove("theme").unwrap();
        assert_eq!(backend.get("theme").unwrap(), None);
        // Removing twice is fine
        backend.remove("theme").unwrap();
    }

    #[test]
    fn test_file_backend_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        backend.set("usuarios", "[]").unwrap();
        assert!(!dir.path().join("usuarios.json.tmp").exists());
    }

    #[test]
    fn test_file_backend_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        assert!(matches!(
            backend.set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(backend.get(""), Err(StorageError::InvalidKey(_))));
    }

    #[test]
    fn test_memory_backend() {
        let backend = MemoryBackend::new();
        backend.set("currentUser", "ana@x.com").unwrap();
        assert_eq!(
            backend.get("currentUser").unwrap().as_deref(),
            Some("ana@x.com")
        );
        backend.remove("currentUser").unwrap();
        assert_eq!(backend.get("currentUser").unwrap(), None);
    }
}

//! Record store
//!
//! Named collections stored as JSON arrays under a single key each. Reads
//! never fail: a missing or malformed value is an empty collection. Writes
//! replace the whole collection (last write wins).

use crate::storage::{KeyValueBackend, MemoryBackend, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// The collections kept in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Reviews,
    ContactMessages,
}

impl Collection {
    /// Storage key, kept compatible with existing profiles.
    pub fn key(self) -> &'static str {
        match self {
            Collection::Users => "usuarios",
            Collection::Reviews => "resenas",
            Collection::ContactMessages => "mensajesContacto",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone)]
pub struct RecordStore {
    backend: Arc<dyn KeyValueBackend>,
}

impl RecordStore {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Load a collection. Returns an empty vec when the key is absent,
    /// unreadable or not a JSON array of `T`.
    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        let Some(raw) = self.get_raw(collection.key()) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Malformed data under '{}', treating as empty: {}", collection, e);
                Vec::new()
            }
        }
    }

    /// Serialize the full collection and overwrite the stored value.
    pub fn save<T: Serialize>(&self, collection: Collection, records: &[T]) -> Result<(), StorageError> {
        let json = serde_json::to_string(records)?;
        self.backend.set(collection.key(), &json)?;
        tracing::debug!("Saved {} record(s) to '{}'", records.len(), collection);
        Ok(())
    }

    /// Whether anything is stored under the collection's key. A value that
    /// exists but can't be read still counts as present.
    pub fn contains(&self, collection: Collection) -> bool {
        match self.backend.get(collection.key()) {
            Ok(value) => value.is_some(),
            Err(e) => {
                tracing::warn!("Failed to read '{}', assuming it exists: {}", collection, e);
                true
            }
        }
    }

    /// Read a raw string slot. Backend errors are logged and read as absent.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read '{}': {}", key, e);
                None
            }
        }
    }

    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.backend.set(key, value)
    }

    pub fn remove_raw(&self, key: &str) -> Result<(), StorageError> {
        self.backend.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        name: String,
        n: u32,
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry { name: "a".into(), n: 1 },
            Entry { name: "b".into(), n: 2 },
            Entry { name: "c".into(), n: 3 },
        ]
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let store = RecordStore::in_memory();
        store.save(Collection::Reviews, &entries()).unwrap();
        let loaded: Vec<Entry> = store.load(Collection::Reviews);
        assert_eq!(loaded, entries());
    }

    #[test]
    fn test_missing_key_loads_empty_twice() {
        let store = RecordStore::in_memory();
        let first: Vec<Entry> = store.load(Collection::Users);
        let second: Vec<Entry> = store.load(Collection::Users);
        assert!(first.is_empty());
        assert!(second.is_empty());
        assert!(!store.contains(Collection::Users));
    }

    #[test]
    fn test_corrupted_value_loads_empty_twice() {
        let store = RecordStore::in_memory();
        store.set_raw("usuarios", "{not json").unwrap();
        let first: Vec<Entry> = store.load(Collection::Users);
        let second: Vec<Entry> = store.load(Collection::Users);
        assert!(first.is_empty());
        assert!(second.is_empty());

        store.set_raw("usuarios", "null").unwrap();
        let nulls: Vec<Entry> = store.load(Collection::Users);
        assert!(nulls.is_empty());
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let store = RecordStore::in_memory();
        store.save(Collection::ContactMessages, &entries()).unwrap();
        store
            .save(Collection::ContactMessages, &[Entry { name: "z".into(), n: 9 }])
            .unwrap();
        let loaded: Vec<Entry> = store.load(Collection::ContactMessages);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "z");
    }

    #[test]
    fn test_collection_keys() {
        assert_eq!(Collection::Users.key(), "usuarios");
        assert_eq!(Collection::Reviews.key(), "resenas");
        assert_eq!(Collection::ContactMessages.key(), "mensajesContacto");
    }

    #[test]
    fn test_unreadable_value_counts_as_present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("resenas.json"), [0xff, 0xfe, 0x00]).unwrap();
        let store = RecordStore::new(Arc::new(crate::storage::FileBackend::new(dir.path())));

        assert!(store.contains(Collection::Reviews));
        assert!(!store.contains(Collection::Users));
        let loaded: Vec<Entry> = store.load(Collection::Reviews);
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_file_backed_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(Arc::new(crate::storage::FileBackend::new(dir.path())));
        store.save(Collection::Reviews, &entries()).unwrap();

        // A fresh store over the same directory sees the same data
        let reopened = RecordStore::new(Arc::new(crate::storage::FileBackend::new(dir.path())));
        let loaded: Vec<Entry> = reopened.load(Collection::Reviews);
        assert_eq!(loaded, entries());
    }
}

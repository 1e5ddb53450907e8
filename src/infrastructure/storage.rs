// src/infrastructure/storage.rs
use crate::application::NoteStore;
use crate::constants::STORAGE_KEY;
use crate::domain::{DomainError, Note};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace};

/// String-keyed blob storage, the shape of a browser's local storage
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, DomainError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), DomainError>;

    fn remove_item(&mut self, key: &str) -> Result<(), DomainError>;
}

/// Key-value store persisted as one JSON object file.
///
/// Every call reads the file afresh and every write replaces it whole, so
/// another process writing the same file between two calls is silently
/// overwritten. A missing file is an empty store.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        debug!(?path, "Creating FileKeyValueStore");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<HashMap<String, String>, DomainError> {
        if !self.path.exists() {
            trace!(path = ?self.path, "Store file absent, treating as empty");
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            DomainError::StorageError(format!(
                "Failed to read store file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            DomainError::MalformedStore(format!(
                "Store file {} is not a JSON object of strings: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn write_all(&self, items: &HashMap<String, String>) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                DomainError::StorageError(format!(
                    "Failed to create store directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(items)
            .map_err(|e| DomainError::StorageError(format!("Failed to serialize store: {}", e)))?;

        fs::write(&self.path, json).map_err(|e| {
            DomainError::StorageError(format!(
                "Failed to write store file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), DomainError> {
        let mut items = self.read_all()?;
        if items.remove(key).is_some() {
            self.write_all(&items)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    items: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), DomainError> {
        self.items.remove(key);
        Ok(())
    }
}

/// Note collection stored as a JSON list under a single key
#[derive(Debug, Clone)]
pub struct LocalNoteStore<K: KeyValueStore> {
    backend: K,
    key: String,
}

impl<K: KeyValueStore> LocalNoteStore<K> {
    pub fn new(backend: K) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    pub fn with_key(backend: K, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<K: KeyValueStore> NoteStore for LocalNoteStore<K> {
    #[instrument(level = "trace", skip(self), fields(key = %self.key))]
    fn load(&mut self) -> Result<Vec<Note>, DomainError> {
        let Some(blob) = self.backend.get_item(&self.key)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&blob).map_err(|e| {
            DomainError::MalformedStore(format!("Blob under key '{}' is not a note list: {}", self.key, e))
        })
    }

    #[instrument(level = "trace", skip(self, notes), fields(key = %self.key, count = notes.len()))]
    fn save(&mut self, notes: &[Note]) -> Result<(), DomainError> {
        let blob = serde_json::to_string(notes)
            .map_err(|e| DomainError::StorageError(format!("Failed to encode notes: {}", e)))?;
        self.backend.set_item(&self.key, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_missing_file_when_getting_item_then_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("store.json"));

        assert_eq!(store.get_item("notes").unwrap(), None);
    }

    #[test]
    fn given_item_set_when_reopening_file_then_item_survives() {
        // Arrange
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("store.json");
        let mut store = FileKeyValueStore::new(&path);

        // Act
        store.set_item("notes", "[]").unwrap();
        store.set_item("other", "x").unwrap();
        let reopened = FileKeyValueStore::new(&path);

        // Assert
        assert_eq!(reopened.get_item("notes").unwrap(), Some("[]".to_string()));
        assert_eq!(reopened.get_item("other").unwrap(), Some("x".to_string()));
    }

    #[test]
    fn given_item_when_removing_then_other_keys_remain() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileKeyValueStore::new(temp_dir.path().join("store.json"));
        store.set_item("a", "1").unwrap();
        store.set_item("b", "2").unwrap();

        store.remove_item("a").unwrap();

        assert_eq!(store.get_item("a").unwrap(), None);
        assert_eq!(store.get_item("b").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn given_corrupt_file_when_getting_item_then_returns_malformed_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();
        let store = FileKeyValueStore::new(&path);

        let result = store.get_item("notes");

        assert!(matches!(result, Err(DomainError::MalformedStore(_))));
    }

    #[test]
    fn given_absent_key_when_loading_notes_then_returns_empty_collection() {
        let mut store = LocalNoteStore::new(MemoryKeyValueStore::new());

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn given_saved_notes_when_loading_then_returns_equal_collection() {
        // Arrange
        let mut store = LocalNoteStore::new(MemoryKeyValueStore::new());
        let notes = vec![
            Note::new(1, "a"),
            Note {
                id: 2,
                content: String::new(),
                fixed: true,
            },
        ];

        // Act
        store.save(&notes).unwrap();
        let loaded = store.load().unwrap();

        // Assert
        assert_eq!(loaded, notes);
    }

    #[test]
    fn given_saved_notes_when_inspecting_blob_then_uses_notes_key_and_json_list() {
        let mut store = LocalNoteStore::new(MemoryKeyValueStore::new());

        store.save(&[Note::new(1, "a")]).unwrap();

        let blob = store.backend().get_item("notes").unwrap().unwrap();
        assert_eq!(blob, r#"[{"id":1,"content":"a","fixed":false}]"#);
    }

    #[test]
    fn given_second_save_when_loading_then_replaces_first_entirely() {
        let mut store = LocalNoteStore::new(MemoryKeyValueStore::new());

        store.save(&[Note::new(1, "a"), Note::new(2, "b")]).unwrap();
        store.save(&[Note::new(3, "c")]).unwrap();

        assert_eq!(store.load().unwrap(), vec![Note::new(3, "c")]);
    }

    #[test]
    fn given_malformed_blob_when_loading_then_returns_malformed_error() {
        let mut backend = MemoryKeyValueStore::new();
        backend.set_item("notes", "{broken").unwrap();
        let mut store = LocalNoteStore::new(backend);

        let result = store.load();

        assert!(matches!(result, Err(DomainError::MalformedStore(_))));
    }

    #[test]
    fn given_custom_key_when_saving_then_default_key_is_untouched() {
        let mut store = LocalNoteStore::with_key(MemoryKeyValueStore::new(), "scratch");

        store.save(&[Note::new(1, "a")]).unwrap();

        assert_eq!(store.backend().get_item("notes").unwrap(), None);
        assert!(store.backend().get_item("scratch").unwrap().is_some());
    }
}

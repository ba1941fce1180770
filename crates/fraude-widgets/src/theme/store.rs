//! Key-value storage for the persisted theme slot.
//!
//! The site only ever persists one string, but the slot name is
//! configurable, so stores are plain string maps.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::error::{Result, WidgetError};

/// Abstraction over the persistent key-value store.
///
/// Absence of a key is a normal state and is reported as `Ok(None)`.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-memory store, used by tests and by sessions that should not persist.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a value, returning the store for chaining.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Store backed by a small JSON object on disk.
///
/// A missing file is an empty store. The file is rewritten in full on every
/// change; there is only ever a handful of keys.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|source| WidgetError::StoreEncoding {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
            }
        }

        let json = serde_json::to_string_pretty(values).map_err(|source| {
            WidgetError::StoreEncoding {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, json).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> WidgetError {
        WidgetError::StoreIo {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut values = self.load()?;
        if values.remove(key).is_some() {
            self.save(&values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn memory_store_set_overwrites() {
        let mut store = MemoryStore::new().with_value("theme", "light");
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        store.remove("theme").unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut first = FileStore::new(&path);
        first.set("theme", "dark").unwrap();
        first.set("other", "kept").unwrap();

        let second = FileStore::new(&path);
        assert_eq!(second.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(second.get("other").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn file_store_remove_leaves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("prefs.json"));
        store.set("theme", "light").unwrap();
        store.set("lang", "tr").unwrap();

        store.remove("theme").unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
        assert_eq!(store.get("lang").unwrap().as_deref(), Some("tr"));
    }

    #[test]
    fn file_store_reports_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.get("theme"),
            Err(WidgetError::StoreEncoding { .. })
        ));
    }
}

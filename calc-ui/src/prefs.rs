//! Key-value storage for user preferences.
//!
//! The presentation layer persists a handful of string values (currently
//! just the theme). Stores are passed around explicitly; there is no global
//! instance.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{StorageConfig, StoreBackend};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preferences I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt preferences file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// A minimal string key-value store.
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, StoreError>;

    fn set(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError>;

    fn remove(
        &mut self,
        key: &str,
    ) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(
        &mut self,
        key: &str,
    ) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(
        &mut self,
        key: &str,
    ) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Store backed by a flat TOML table on disk.
///
/// The file is read on every `get` and rewritten on every change, so
/// several processes see each other's writes. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        toml::from_str(&text).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn write_all(
        &self,
        values: &BTreeMap<String, String>,
    ) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let text = toml::to_string(values)?;
        fs::write(&self.path, text).map_err(|source| self.io_error(source))?;
        debug!(path = %self.path.display(), keys = values.len(), "wrote preferences");
        Ok(())
    }

    fn io_error(
        &self,
        source: std::io::Error,
    ) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(
        &mut self,
        key: &str,
    ) -> Result<(), StoreError> {
        let mut values = self.read_all()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

/// Opens the store selected by the storage configuration.
pub fn open_store(config: &StorageConfig) -> Box<dyn KeyValueStore> {
    match config.backend {
        StoreBackend::File => {
            info!(path = %config.prefs_path.display(), "using file preference store");
            Box::new(FileStore::new(&config.prefs_path))
        }
        StoreBackend::Memory => {
            info!("using in-memory preference store");
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn exercise(store: &mut dyn KeyValueStore) {
        assert_eq!(store.get("theme").unwrap(), None);

        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));

        store.remove("theme").unwrap();
        assert_eq!(store.get("theme").unwrap(), None);

        // removing an absent key is not an error
        store.remove("theme").unwrap();
    }

    #[test]
    fn memory_store_get_set_remove() {
        exercise(&mut MemoryStore::new());
    }

    #[test]
    fn file_store_get_set_remove() {
        let dir = tempfile::tempdir().unwrap();
        exercise(&mut FileStore::new(dir.path().join("prefs.toml")));
    }

    #[test]
    fn file_store_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("site-calc").join("prefs.toml");
        let mut store = FileStore::new(&path);

        store.set("theme", "dark").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn file_store_is_visible_to_a_second_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");

        FileStore::new(&path).set("theme", "dark").unwrap();

        assert_eq!(FileStore::new(&path).get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn file_store_reports_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "theme = [").unwrap();

        let err = FileStore::new(&path).get("theme").unwrap_err();

        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn open_store_honours_backend() {
        let config = StorageConfig {
            backend: StoreBackend::Memory,
            prefs_path: PathBuf::from("unused.toml"),
        };
        let mut store = open_store(&config);

        store.set("theme", "dark").unwrap();

        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert!(!std::path::Path::new("unused.toml").exists());
    }
}

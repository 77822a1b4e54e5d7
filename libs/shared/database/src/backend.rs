use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::store::StoreError;

/// Raw durable map from string keys to serialized values.
///
/// Every `set_raw`/`remove_raw` replaces the whole entry in one step, so a
/// failed call leaves the previous value in place.
pub trait KeyValueBackend: Send + Sync {
    fn get_raw(&self, key: &str) -> Option<String>;
    fn set_raw(&self, key: &str, value: String) -> Result<(), StoreError>;
    fn remove_raw(&self, key: &str) -> Result<(), StoreError>;
}

type Entries = BTreeMap<String, String>;

fn lock(entries: &Mutex<Entries>) -> MutexGuard<'_, Entries> {
    entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Process-local backend; nothing outlives the value.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<Entries>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get_raw(&self, key: &str) -> Option<String> {
        lock(&self.entries).get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: String) -> Result<(), StoreError> {
        lock(&self.entries).insert(key.to_string(), value);
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<(), StoreError> {
        lock(&self.entries).remove(key);
        Ok(())
    }
}

/// Keeps the whole map as one JSON object on disk.
///
/// Writes go to a sibling temp file which is then renamed over the original.
/// The in-memory copy is only updated once the rename succeeded.
#[derive(Debug)]
pub struct JsonFileBackend {
    path: PathBuf,
    entries: Mutex<Entries>,
}

impl JsonFileBackend {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = Self::read_entries(&path)?;
        debug!("Opened store file {} with {} keys", path.display(), entries.len());

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn read_entries(path: &Path) -> Result<Entries, StoreError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(err) => return Err(err.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }

        match serde_json::from_str(&contents) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                warn!("Store file {} is unreadable, starting empty: {}", path.display(), err);
                Ok(Entries::new())
            }
        }
    }

    fn persist(&self, entries: &Entries) -> Result<(), StoreError> {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut Entries)) -> Result<(), StoreError> {
        let mut entries = lock(&self.entries);
        let mut next = entries.clone();
        apply(&mut next);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}

impl KeyValueBackend for JsonFileBackend {
    fn get_raw(&self, key: &str) -> Option<String> {
        lock(&self.entries).get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value);
        })
    }

    fn remove_raw(&self, key: &str) -> Result<(), StoreError> {
        if !lock(&self.entries).contains_key(key) {
            return Ok(());
        }
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_backend_overwrites_and_removes() {
        let backend = MemoryBackend::new();
        backend.set_raw("k", "1".to_string()).unwrap();
        backend.set_raw("k", "2".to_string()).unwrap();
        assert_eq!(backend.get_raw("k").as_deref(), Some("2"));

        backend.remove_raw("k").unwrap();
        backend.remove_raw("k").unwrap();
        assert_eq!(backend.get_raw("k"), None);
    }

    #[test]
    fn file_backend_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let backend = JsonFileBackend::open(&path).unwrap();
        backend.set_raw("hs_users", "[]".to_string()).unwrap();
        drop(backend);

        let reopened = JsonFileBackend::open(&path).unwrap();
        assert_eq!(reopened.get_raw("hs_users").as_deref(), Some("[]"));
    }

    #[test]
    fn file_backend_treats_corrupt_file_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();

        let backend = JsonFileBackend::open(&path).unwrap();
        assert_eq!(backend.get_raw("anything"), None);
    }

    #[test]
    fn file_backend_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let backend = JsonFileBackend::open(&path).unwrap();
        backend.set_raw("k", "true".to_string()).unwrap();
        assert!(path.exists());
    }
}

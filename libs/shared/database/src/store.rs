use std::fmt;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use shared_config::AppConfig;
use shared_models::AppError;

use crate::backend::{JsonFileBackend, KeyValueBackend, MemoryBackend};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// The fixed set of entries the application keeps in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Users,
    Appointments,
    Doctors,
    AdminCredential,
    CurrentUser,
    AdminAuth,
}

impl CollectionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKey::Users => "users",
            CollectionKey::Appointments => "appointments",
            CollectionKey::Doctors => "doctors",
            CollectionKey::AdminCredential => "adminCreds",
            CollectionKey::CurrentUser => "currentUser",
            CollectionKey::AdminAuth => "adminAuth",
        }
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed access to a [`KeyValueBackend`] under a key namespace.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn KeyValueBackend>,
    prefix: String,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").field("prefix", &self.prefix).finish()
    }
}

impl Store {
    pub fn new(backend: Arc<dyn KeyValueBackend>, prefix: impl Into<String>) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
        }
    }

    pub fn in_memory(prefix: impl Into<String>) -> Self {
        Self::new(Arc::new(MemoryBackend::new()), prefix)
    }

    /// Opens the file-backed store named by the configuration.
    pub fn open(config: &AppConfig) -> Result<Self, StoreError> {
        let backend = JsonFileBackend::open(&config.store_path)?;
        Ok(Self::new(Arc::new(backend), config.store_prefix.clone()))
    }

    fn qualified(&self, key: CollectionKey) -> String {
        format!("{}{}", self.prefix, key.as_str())
    }

    pub fn contains(&self, key: CollectionKey) -> bool {
        self.backend.get_raw(&self.qualified(key)).is_some()
    }

    /// Returns the stored value, or `fallback` when the entry is missing or
    /// does not deserialize as `T`.
    pub fn load<T: DeserializeOwned>(&self, key: CollectionKey, fallback: T) -> T {
        let qualified = self.qualified(key);
        let Some(raw) = self.backend.get_raw(&qualified) else {
            return fallback;
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!("Ignoring unreadable value at {}: {}", qualified, err);
                fallback
            }
        }
    }

    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: CollectionKey) -> T {
        self.load(key, T::default())
    }

    pub fn save<T: Serialize + ?Sized>(
        &self,
        key: CollectionKey,
        value: &T,
    ) -> Result<(), StoreError> {
        let qualified = self.qualified(key);
        let raw = serde_json::to_string(value)?;
        debug!("Saving {} ({} bytes)", qualified, raw.len());
        self.backend.set_raw(&qualified, raw)
    }

    pub fn remove(&self, key: CollectionKey) -> Result<(), StoreError> {
        let qualified = self.qualified(key);
        debug!("Removing {}", qualified);
        self.backend.remove_raw(&qualified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_returns_fallback_for_missing_key() {
        let store = Store::in_memory("hs_");
        let users: Vec<String> = store.load(CollectionKey::Users, vec!["x".to_string()]);
        assert_eq!(users, vec!["x".to_string()]);
    }

    #[test]
    fn load_returns_fallback_for_corrupt_value() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set_raw("hs_adminAuth", "{oops".to_string()).unwrap();
        let store = Store::new(backend, "hs_");

        assert!(!store.load(CollectionKey::AdminAuth, false));
    }

    #[test]
    fn load_returns_fallback_for_wrong_shape() {
        let store = Store::in_memory("hs_");
        store.save(CollectionKey::Doctors, &true).unwrap();

        let doctors: Vec<u32> = store.load_or_default(CollectionKey::Doctors);
        assert!(doctors.is_empty());
    }

    #[test]
    fn keys_are_namespaced_by_prefix() {
        let backend = Arc::new(MemoryBackend::new());
        let store = Store::new(backend.clone(), "hs_");
        store.save(CollectionKey::AdminCredential, &"x").unwrap();

        assert_eq!(backend.get_raw("hs_adminCreds").as_deref(), Some("\"x\""));
        assert!(store.contains(CollectionKey::AdminCredential));
    }

    #[test]
    fn remove_of_absent_key_is_a_no_op() {
        let store = Store::in_memory("hs_");
        store.remove(CollectionKey::CurrentUser).unwrap();
        assert!(!store.contains(CollectionKey::CurrentUser));
    }
}

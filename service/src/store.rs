//! Key-value storage for batches and weighing events
//!
//! Values are JSON documents stored under string keys, the same layout the
//! browser front-end keeps in local storage. The schedule engine never sees
//! the store; only the services read and write it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Minimal key-value store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&self, key: &str, value: String) -> AppResult<()>;

    /// Exclusive guard held across a read-modify-write of one or more keys.
    ///
    /// Every service mutation takes it before loading the lists it rewrites.
    fn lock_writes(&self) -> AppResult<MutexGuard<'_, ()>>;
}

/// Store handle shared between services
pub type SharedStore = Arc<dyn KeyValueStore>;

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
    writes: Mutex<()>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AppError::StorageError("memory store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> AppResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AppError::StorageError("memory store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn lock_writes(&self) -> AppResult<MutexGuard<'_, ()>> {
        self.writes
            .lock()
            .map_err(|_| AppError::StorageError("memory store write lock poisoned".to_string()))
    }
}

/// Keys used for each collection
#[derive(Debug, Clone)]
pub struct StoreKeys {
    pub batches: String,
    pub weighings: String,
}

impl StoreKeys {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            batches: format!("{}:batches", prefix),
            weighings: format!("{}:weighings", prefix),
        }
    }
}

/// Read a JSON list, treating a missing key as empty
pub fn load_list<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> AppResult<Vec<T>> {
    match store.get(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

pub fn save_list<T: Serialize>(store: &dyn KeyValueStore, key: &str, items: &[T]) -> AppResult<()> {
    let raw = serde_json::to_string(items)?;
    store.set(key, raw)
}

//! Persistence Adapter
//!
//! Key-value storage seam plus the repository that mirrors the room list
//! into it as a JSON array.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::models::Room;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("failed to serialize rooms: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        StorageError::Backend(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// String key-value store with browser `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser `window.localStorage`.
///
/// The handle is looked up on every call so the type stays `Send + Sync`
/// and can live inside a signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(Self::storage()?.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(Self::storage()?.set_item(key, value)?)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Ok(Self::storage()?.remove_item(key)?)
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

/// Reads and writes the full room list under a single key.
#[derive(Debug, Clone)]
pub struct RoomRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> RoomRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored list.
    ///
    /// Returns an empty list if the key is missing, unreadable, or malformed.
    pub fn load(&self) -> Vec<Room> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::info!("no rooms stored under {:?}", self.key);
                return Vec::new();
            }
            Err(e) => {
                log::warn!("failed to read {:?}, starting empty: {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Room>>(&raw) {
            Ok(rooms) => {
                log::info!("loaded {} rooms from {:?}", rooms.len(), self.key);
                rooms
            }
            Err(e) => {
                log::warn!("malformed rooms under {:?}, starting empty: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored list with `rooms`.
    pub fn save(&self, rooms: &[Room]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(rooms)?;
        self.store.set(&self.key, &raw)?;
        log::debug!("saved {} rooms to {:?}", rooms.len(), self.key);
        Ok(())
    }
}

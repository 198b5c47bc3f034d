// ABOUTME: Key-value storage abstraction for persisted app state
// ABOUTME: Pluggable backends (in-memory, file) behind a get/set-by-key trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

/// File-backed store, one JSON document per key
pub mod file;
/// In-memory store
pub mod memory;

use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};
use ymeal_core::errors::AppResult;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Opaque get/set-by-key store
///
/// Values are serialized documents. There is no transactionality: the last
/// write for a key wins.
///
/// # Examples
///
/// ```rust
/// use ymeal::storage::{KeyValueStore, MemoryStore};
///
/// # fn example() -> ymeal_core::errors::AppResult<()> {
/// let store = MemoryStore::new();
/// store.set("profileConfig", "{}")?;
/// assert_eq!(store.get("profileConfig")?.as_deref(), Some("{}"));
/// assert_eq!(store.get("missing")?, None);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

/// Read and decode the JSON document under `key`, recovering to `None`
///
/// Backend failures and documents that do not decode into `T` are logged and
/// treated as absent, so callers fall back to their empty state.
pub fn load_json_lossy<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "Failed to read stored value, starting empty");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Stored value is malformed, starting empty");
            None
        }
    }
}

/// Encode `value` as JSON and write it under `key`
///
/// # Errors
///
/// Returns `SerializationError` if encoding fails, or the backend's error if
/// the write fails
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Backend selection for [`create_store`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Volatile process-local storage
    Memory,
    /// Files under the given directory
    File(PathBuf),
}

/// Build a shared store for the selected backend
///
/// # Errors
///
/// Returns `StorageError` if the file backend's directory cannot be created
pub fn create_store(backend: &StorageBackend) -> AppResult<Arc<dyn KeyValueStore>> {
    match backend {
        StorageBackend::Memory => {
            info!("Initializing in-memory key-value store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackend::File(root) => {
            info!(root = %root.display(), "Initializing file key-value store");
            Ok(Arc::new(FileStore::open(root)?))
        }
    }
}

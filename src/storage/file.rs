// ABOUTME: File-backed key-value store writing one JSON document per key
// ABOUTME: Writes go through a temp file and rename so readers never see partial data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;
use ymeal_core::errors::{AppError, AppResult};

use super::KeyValueStore;

/// Store rooted at a directory; key `k` lives in `<root>/k.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the directory cannot be created
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            AppError::storage(format!(
                "Cannot create storage directory {}: {e}",
                root.display()
            ))
            .with_source(e)
        })?;
        Ok(Self { root })
    }

    /// Directory holding the documents
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        if !is_valid_key(key) {
            return Err(AppError::invalid_input(format!(
                "Storage key {key:?} must be non-empty and use only letters, digits, '_' or '-'"
            )));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

/// Whether `key` can name a document: non-empty ASCII letters, digits, `_` or `-`
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("Cannot read {}: {e}", path.display()))
                .with_resource_id(key)
                .with_source(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .and_then(|()| fs::rename(&tmp, &path))
            .map_err(|e| {
                AppError::storage(format!("Cannot write {}: {e}", path.display()))
                    .with_resource_id(key)
                    .with_source(e)
            })?;
        debug!(key, bytes = value.len(), "Stored value");
        Ok(())
    }
}

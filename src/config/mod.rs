// ABOUTME: Application configuration loaded from environment variables
// ABOUTME: Data directory, storage backend, inventory key, environment and log level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

//! Environment-only configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `YMEAL_DATA_DIR` | platform data dir + `ymeal`, else `./data` |
//! | `YMEAL_STORAGE` | `file` (`memory` for a volatile store) |
//! | `YMEAL_INVENTORY_KEY` | `fridgeIngredients` |
//! | `ENVIRONMENT` | `development` |
//! | `RUST_LOG` | `info` |

/// Environment and log level types
pub mod environment;

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;
use ymeal_core::constants::{service_names, storage_keys};
use ymeal_core::errors::{AppError, AppResult};

pub use environment::{Environment, LogLevel};

use crate::storage::{file::is_valid_key, StorageBackend};

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the file store
    pub data_dir: PathBuf,
    /// Keep state in memory only
    pub in_memory: bool,
    /// Key the inventory is stored under
    pub inventory_key: String,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            in_memory: false,
            inventory_key: storage_keys::INVENTORY.to_owned(),
            environment: Environment::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `YMEAL_DATA_DIR` is blank, `YMEAL_STORAGE`
    /// is neither `file` nor `memory`, or `YMEAL_INVENTORY_KEY` is not a
    /// valid storage key
    pub fn from_env() -> AppResult<Self> {
        let data_dir = match env::var("YMEAL_DATA_DIR") {
            Ok(dir) if dir.trim().is_empty() => {
                return Err(AppError::config("YMEAL_DATA_DIR must not be empty"));
            }
            Ok(dir) => PathBuf::from(dir),
            Err(_) => default_data_dir(),
        };

        let in_memory = match env::var("YMEAL_STORAGE") {
            Ok(backend) => match backend.trim().to_lowercase().as_str() {
                "file" => false,
                "memory" => true,
                other => {
                    return Err(AppError::config(format!(
                        "YMEAL_STORAGE must be 'file' or 'memory', got '{other}'"
                    )));
                }
            },
            Err(_) => false,
        };

        let inventory_key =
            env::var("YMEAL_INVENTORY_KEY").unwrap_or_else(|_| storage_keys::INVENTORY.to_owned());
        if !is_valid_key(&inventory_key) {
            return Err(AppError::config(format!(
                "YMEAL_INVENTORY_KEY '{inventory_key}' may only contain letters, digits, '-' and '_'"
            )));
        }

        let config = Self {
            data_dir,
            in_memory,
            inventory_key,
            environment: env::var("ENVIRONMENT")
                .map(|e| Environment::from_str_or_default(&e))
                .unwrap_or_default(),
            log_level: env::var("RUST_LOG")
                .map(|l| LogLevel::from_str_or_default(&l))
                .unwrap_or_default(),
        };
        debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Override the data directory
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Backend to open for this configuration
    #[must_use]
    pub fn storage_backend(&self) -> StorageBackend {
        if self.in_memory {
            StorageBackend::Memory
        } else {
            StorageBackend::File(self.data_dir.clone())
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from("data"),
        |dir| dir.join(service_names::YMEAL),
    )
}

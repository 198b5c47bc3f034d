// ABOUTME: Integration tests for environment-based configuration and logging setup
// ABOUTME: Mutates process environment variables, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use serial_test::serial;
use ymeal::config::{AppConfig, Environment, LogLevel};
use ymeal::constants::storage_keys;
use ymeal::errors::ErrorCode;
use ymeal::logging::{LogFormat, LoggingConfig};
use ymeal::storage::StorageBackend;

const VARS: [&str; 6] = [
    "YMEAL_DATA_DIR",
    "YMEAL_STORAGE",
    "YMEAL_INVENTORY_KEY",
    "ENVIRONMENT",
    "RUST_LOG",
    "LOG_FORMAT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults() {
    clear_env();
    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.inventory_key, storage_keys::INVENTORY);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.data_dir.ends_with("ymeal") || config.data_dir == PathBuf::from("data"));
    assert_eq!(
        config.storage_backend(),
        StorageBackend::File(config.data_dir.clone())
    );
}

#[test]
#[serial]
fn test_values_from_environment() {
    clear_env();
    env::set_var("YMEAL_DATA_DIR", "/tmp/ymeal-test");
    env::set_var("YMEAL_STORAGE", "Memory");
    env::set_var("YMEAL_INVENTORY_KEY", "fridge_v2");
    env::set_var("ENVIRONMENT", "prod");
    env::set_var("RUST_LOG", "ymeal=trace,debug");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.data_dir, PathBuf::from("/tmp/ymeal-test"));
    assert_eq!(config.storage_backend(), StorageBackend::Memory);
    assert_eq!(config.inventory_key, "fridge_v2");
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
#[serial]
fn test_invalid_values_are_config_errors() {
    clear_env();

    env::set_var("YMEAL_DATA_DIR", "   ");
    assert_eq!(
        AppConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
    env::remove_var("YMEAL_DATA_DIR");

    env::set_var("YMEAL_STORAGE", "redis");
    assert_eq!(
        AppConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
    env::remove_var("YMEAL_STORAGE");

    env::set_var("YMEAL_INVENTORY_KEY", "../fridge");
    assert_eq!(
        AppConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
    clear_env();
}

#[test]
#[serial]
fn test_data_dir_override() {
    clear_env();
    let config = AppConfig::from_env()
        .unwrap()
        .with_data_dir("/srv/ymeal");
    assert_eq!(
        config.storage_backend(),
        StorageBackend::File(PathBuf::from("/srv/ymeal"))
    );
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.level, "info");
    assert!(!config.include_location);

    env::set_var("ENVIRONMENT", "production");
    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);

    env::set_var("LOG_FORMAT", "compact");
    env::set_var("RUST_LOG", "warn");
    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, "warn");
    assert_eq!(config.environment, Environment::Production);
    clear_env();
}

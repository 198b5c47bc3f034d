// ABOUTME: Main library entry point for the Ymeal student cooking assistant
// ABOUTME: Fridge inventory, recipe matching, profile and account validation over a key-value store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

#![deny(unsafe_code)]

//! # Ymeal
//!
//! Core of a budget cooking assistant for students: track what is in the
//! fridge, find recipes that use it, and keep a dietary profile.
//!
//! ## Features
//!
//! - **Fridge inventory**: quantities stored in base units (count, grams,
//!   milliliters), merged by name, grouped by category
//! - **Recipes**: built-in catalog, search, and ranking by fridge coverage
//! - **Profile**: diets, budget, cuisine, avoided vegetables and allergies
//! - **Pluggable storage**: in-memory or one-JSON-file-per-key backends
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use ymeal::inventory::{Category, InventoryService, NewIngredient, QuantityFormat};
//! use ymeal::storage::MemoryStore;
//!
//! # fn main() -> ymeal::errors::AppResult<()> {
//! let mut service = InventoryService::load(Arc::new(MemoryStore::new()));
//! let rice = NewIngredient::from_display("Riz", Category::Starches, 1.5, QuantityFormat::Kilograms);
//! service.add_ingredient(rice)?;
//! assert_eq!(service.inventory().entries()[0].display_quantity(), "1.50 kg");
//! # Ok(())
//! # }
//! ```

/// Registration form validation
pub mod account;
/// Environment-based configuration
pub mod config;
/// Fridge inventory model and service
pub mod inventory;
/// Tracing subscriber setup
pub mod logging;
/// User profile configuration
pub mod profile;
/// Recipe catalog and fridge matching
pub mod recipes;
/// Key-value persistence backends
pub mod storage;

/// Error types shared across the workspace
pub mod errors {
    pub use ymeal_core::errors::*;
}

/// Application constants
pub mod constants {
    pub use ymeal_core::constants::*;
}

// ABOUTME: User profile configuration: diets, budget, cuisine, exclusions
// ABOUTME: Loaded from and saved to the key-value store under the profile key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

/// Cuisine, vegetable and allergen lists
pub mod catalog;
/// Profile payload and validation
pub mod models;

use tracing::{info, warn};
use ymeal_core::constants::storage_keys;
use ymeal_core::errors::AppResult;

pub use catalog::{is_known_cuisine, suggest, ALLERGIES, CUISINES, VEGETABLES};
pub use models::{uniq_add, Budget, Diet, People, ProfileConfig, ProfileField};

use crate::storage::{load_json_lossy, save_json, KeyValueStore};

impl ProfileConfig {
    /// Vegetables matching `query` not already avoided
    #[must_use]
    pub fn vegetable_suggestions(&self, query: &str) -> Vec<&'static str> {
        suggest(&VEGETABLES, query, &self.avoid_veg)
    }

    /// Allergens matching `query` not already listed
    #[must_use]
    pub fn allergy_suggestions(&self, query: &str) -> Vec<&'static str> {
        suggest(&ALLERGIES, query, &self.allergies)
    }
}

/// Reads and writes the profile document
pub struct ProfileStore<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> ProfileStore<'a> {
    /// Wrap a key-value store
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Stored profile, or the empty profile if absent or malformed
    #[must_use]
    pub fn load(&self) -> ProfileConfig {
        load_json_lossy(self.store, storage_keys::PROFILE).unwrap_or_default()
    }

    /// Save the profile with free-text fields trimmed
    ///
    /// Incomplete profiles are saved too; a warning lists the empty fields.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write fails
    pub fn save(&self, profile: &ProfileConfig) -> AppResult<()> {
        let missing = profile.missing_fields();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(ProfileField::name).collect();
            warn!(missing = ?names, "Saving incomplete profile");
        }
        save_json(self.store, storage_keys::PROFILE, &profile.normalized())?;
        info!(diets = profile.diets.len(), "Profile saved");
        Ok(())
    }
}

// ABOUTME: Favorite recipes persisted as a list of catalog identifiers
// ABOUTME: Toggle-based set that keeps insertion order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

use tracing::debug;
use ymeal_core::constants::storage_keys;
use ymeal_core::errors::{AppError, AppResult};

use super::catalog::find_recipe;
use super::models::Recipe;
use crate::storage::{load_json_lossy, save_json, KeyValueStore};

/// Recipe identifiers the user starred
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    /// Load favorites, recovering to an empty list on missing or malformed data
    #[must_use]
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let ids: Vec<String> = load_json_lossy(store, storage_keys::FAVORITES).unwrap_or_default();
        let mut favorites = Self::default();
        for id in ids {
            if !favorites.contains(&id) {
                favorites.ids.push(id);
            }
        }
        favorites
    }

    /// Persist the current list
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write fails
    pub fn save(&self, store: &dyn KeyValueStore) -> AppResult<()> {
        save_json(store, storage_keys::FAVORITES, &self.ids)
    }

    /// Whether `id` is starred
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav == id)
    }

    /// Star or unstar a catalog recipe, returning whether it is now starred
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if `id` is not in the catalog
    pub fn toggle(&mut self, id: &str) -> AppResult<bool> {
        if let Some(index) = self.ids.iter().position(|fav| fav == id) {
            self.ids.remove(index);
            debug!(recipe = id, "Removed favorite");
            return Ok(false);
        }
        if find_recipe(id).is_none() {
            return Err(AppError::not_found(format!("Recipe {id}")).with_resource_id(id));
        }
        self.ids.push(id.to_owned());
        debug!(recipe = id, "Added favorite");
        Ok(true)
    }

    /// Starred identifiers, in the order they were added
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Starred recipes still present in the catalog
    #[must_use]
    pub fn recipes(&self) -> Vec<&'static Recipe> {
        self.ids.iter().filter_map(|id| find_recipe(id)).collect()
    }
}

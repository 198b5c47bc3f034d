// ABOUTME: Application-level owner of the fridge inventory and its persistence
// ABOUTME: Applies mutations in memory first, then rewrites the whole collection to the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};
use ymeal_core::constants::storage_keys;
use ymeal_core::errors::AppResult;

use super::catalog::Suggestion;
use super::collection::Inventory;
use super::models::{
    AddOutcome, CategoryGroup, IngredientEntry, IngredientId, NewIngredient, QuantityUpdate,
};
use crate::storage::{load_json_lossy, save_json, KeyValueStore};

/// Entry prepared for display
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow<'a> {
    /// Underlying entry
    pub entry: &'a IngredientEntry,
    /// Quantity rendered in the entry's display unit
    pub quantity: String,
    /// Adjustment step, in base units
    pub step: f64,
}

/// Single owner of the inventory for the whole application
///
/// UI layers dispatch operations here and re-render from the returned state.
/// Persistence runs after every mutation and never blocks or undoes it: a
/// failed write is logged and counted, and the in-memory state stays
/// authoritative until the next successful write.
pub struct InventoryService {
    store: Arc<dyn KeyValueStore>,
    key: String,
    inventory: Inventory,
    persist_failures: u64,
}

impl InventoryService {
    /// Load the inventory stored under the default key
    #[must_use]
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        Self::load_from(store, storage_keys::INVENTORY)
    }

    /// Load the inventory stored under `key`
    ///
    /// A missing value, an unreadable store or a malformed document all yield
    /// an empty inventory.
    #[must_use]
    pub fn load_from(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let records: Vec<IngredientEntry> =
            load_json_lossy(store.as_ref(), &key).unwrap_or_default();
        let inventory = Inventory::from_entries(records);
        info!(key = %key, entries = inventory.len(), "Loaded fridge inventory");
        Self {
            store,
            key,
            inventory,
            persist_failures: 0,
        }
    }

    /// Current inventory
    #[must_use]
    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Storage key the inventory is written under
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Number of writes that failed since load
    #[must_use]
    pub const fn persist_failures(&self) -> u64 {
        self.persist_failures
    }

    /// Add a candidate, merging by case-insensitive name
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name, a non-positive quantity or a
    /// merge that would overflow
    pub fn add_ingredient(&mut self, candidate: NewIngredient) -> AppResult<AddOutcome> {
        let outcome = self.inventory.add_ingredient(candidate)?;
        if outcome.is_applied() {
            self.persist();
        }
        Ok(outcome)
    }

    /// Add a suggestion template with its category's default amount
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the template cannot form a valid candidate
    pub fn add_suggestion(&mut self, suggestion: &Suggestion) -> AppResult<AddOutcome> {
        let outcome = self.inventory.add_suggestion(suggestion)?;
        if outcome.is_applied() {
            self.persist();
        }
        Ok(outcome)
    }

    /// Shift an entry's quantity by `delta` base units
    pub fn update_quantity(&mut self, id: &IngredientId, delta: f64) -> QuantityUpdate {
        let update = self.inventory.update_quantity(id, delta);
        self.persist_if_changed(&update);
        update
    }

    /// Raise an entry by one step
    pub fn increment(&mut self, id: &IngredientId) -> QuantityUpdate {
        let update = self.inventory.increment(id);
        self.persist_if_changed(&update);
        update
    }

    /// Lower an entry by one step
    pub fn decrement(&mut self, id: &IngredientId) -> QuantityUpdate {
        let update = self.inventory.decrement(id);
        self.persist_if_changed(&update);
        update
    }

    /// Remove an entry
    pub fn remove_ingredient(&mut self, id: &IngredientId) -> Option<IngredientEntry> {
        let removed = self.inventory.remove_ingredient(id);
        if removed.is_some() {
            self.persist();
        }
        removed
    }

    /// Empty the fridge
    pub fn clear(&mut self) {
        self.inventory.clear();
        self.persist();
    }

    /// Entries grouped by category
    #[must_use]
    pub fn group_by_category(&self) -> Vec<CategoryGroup<'_>> {
        self.inventory.group_by_category()
    }

    /// Suggestions matching `query` that are not stocked yet
    #[must_use]
    pub fn filter_suggestions(&self, query: &str) -> Vec<&'static Suggestion> {
        self.inventory.filter_suggestions(query)
    }

    /// Entries with their formatted quantity and step, in inventory order
    #[must_use]
    pub fn display_rows(&self) -> Vec<DisplayRow<'_>> {
        self.inventory
            .entries()
            .iter()
            .map(|entry| DisplayRow {
                entry,
                quantity: entry.display_quantity(),
                step: entry.step(),
            })
            .collect()
    }

    fn persist_if_changed(&mut self, update: &QuantityUpdate) {
        if update.is_applied() {
            self.persist();
        }
    }

    fn persist(&mut self) {
        match save_json(self.store.as_ref(), &self.key, self.inventory.entries()) {
            Ok(()) => debug!(key = %self.key, entries = self.inventory.len(), "Persisted inventory"),
            Err(e) => {
                self.persist_failures += 1;
                warn!(
                    key = %self.key,
                    failures = self.persist_failures,
                    error = %e,
                    "Failed to persist inventory, keeping in-memory state"
                );
            }
        }
    }
}

impl fmt::Debug for InventoryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryService")
            .field("key", &self.key)
            .field("entries", &self.inventory.len())
            .field("persist_failures", &self.persist_failures)
            .finish_non_exhaustive()
    }
}

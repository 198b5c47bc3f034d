// ABOUTME: Profile commands for ymeal-cli
// ABOUTME: Shows, validates and edits the stored profile configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

use ymeal::errors::{AppError, AppResult};
use ymeal::profile::{
    is_known_cuisine, Budget, Diet, People, ProfileConfig, ProfileStore, CUISINES,
};
use ymeal::storage::KeyValueStore;

use crate::helpers::display::display_profile;

type Result<T> = AppResult<T>;

/// Single-value fields to overwrite
pub struct FieldUpdates {
    /// City or postal code
    pub location: Option<String>,
    /// Budget key
    pub budget: Option<String>,
    /// Cuisine name
    pub cuisine: Option<String>,
    /// Household size key
    pub people: Option<String>,
}

/// Print the stored profile
pub fn show(store: &dyn KeyValueStore) {
    display_profile(&ProfileStore::new(store).load());
}

/// Fail with the first missing field, if any
pub fn validate(store: &dyn KeyValueStore) -> Result<()> {
    let profile = ProfileStore::new(store).load();
    profile.validate()?;
    println!("Profile complete");
    Ok(())
}

/// Overwrite the given single-value fields
pub fn set(store: &dyn KeyValueStore, updates: FieldUpdates) -> Result<()> {
    edit(store, |profile| {
        if let Some(location) = updates.location {
            profile.location = location;
        }
        if let Some(budget) = updates.budget {
            profile.budget = Some(Budget::from_key(&budget).ok_or_else(|| {
                AppError::invalid_input(format!("Unknown budget '{budget}'"))
            })?);
        }
        if let Some(cuisine) = updates.cuisine {
            if !is_known_cuisine(&cuisine) {
                return Err(AppError::invalid_input(format!(
                    "Unknown cuisine '{cuisine}', expected one of: {}",
                    CUISINES.join(", ")
                )));
            }
            profile.cuisine = Some(cuisine);
        }
        if let Some(people) = updates.people {
            profile.people = Some(People::from_key(&people).ok_or_else(|| {
                AppError::invalid_input(format!("Unknown household size '{people}'"))
            })?);
        }
        Ok(())
    })
}

/// Select or deselect a diet
pub fn toggle_diet(store: &dyn KeyValueStore, key: &str) -> Result<()> {
    let diet = Diet::from_key(key)
        .ok_or_else(|| AppError::invalid_input(format!("Unknown diet '{key}'")))?;
    edit(store, |profile| {
        let selected = profile.toggle_diet(diet);
        println!(
            "{} {} {}",
            diet.icon(),
            diet.label(),
            if selected { "selected" } else { "deselected" }
        );
        Ok(())
    })
}

/// Add a vegetable to avoid
pub fn avoid(store: &dyn KeyValueStore, vegetable: &str) -> Result<()> {
    edit(store, |profile| {
        if !profile.add_avoided_vegetable(vegetable) {
            println!("'{}' already listed", vegetable.trim());
        }
        Ok(())
    })
}

/// Add an allergy
pub fn allergy(store: &dyn KeyValueStore, allergen: &str) -> Result<()> {
    edit(store, |profile| {
        if !profile.add_allergy(allergen) {
            println!("'{}' already listed", allergen.trim());
        }
        Ok(())
    })
}

/// Print vegetables and allergens matching `query`
pub fn suggest(store: &dyn KeyValueStore, query: &str) {
    let profile = ProfileStore::new(store).load();
    println!("Légumes: {}", profile.vegetable_suggestions(query).join(", "));
    println!("Allergies: {}", profile.allergy_suggestions(query).join(", "));
}

fn edit(
    store: &dyn KeyValueStore,
    change: impl FnOnce(&mut ProfileConfig) -> Result<()>,
) -> Result<()> {
    let profiles = ProfileStore::new(store);
    let mut profile = profiles.load();
    change(&mut profile)?;
    profiles.save(&profile)
}

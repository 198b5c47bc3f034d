// ABOUTME: Recipe commands for ymeal-cli
// ABOUTME: Search, detail view, fridge ranking, random pick and favorites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

use tracing::info;
use ymeal::errors::{AppError, AppResult};
use ymeal::inventory::InventoryService;
use ymeal::recipes::{
    find_recipe, random_recipe, random_tip, rank_by_fridge, search_recipes, Favorites,
};
use ymeal::storage::KeyValueStore;

use crate::helpers::display::{display_match, display_recipe, display_recipe_line};

type Result<T> = AppResult<T>;

/// Print recipes whose title or ingredients contain `query`
pub fn search(query: &str) {
    let found = search_recipes(query);
    if found.is_empty() {
        println!("No recipe for '{query}'");
    }
    for recipe in found {
        display_recipe_line(recipe, false);
    }
}

/// Print one recipe with a random tip
pub fn show(store: &dyn KeyValueStore, id: &str) -> Result<()> {
    let recipe = find_recipe(id)
        .ok_or_else(|| AppError::not_found(format!("Recipe {id}")).with_resource_id(id))?;
    let favorites = Favorites::load(store);
    display_recipe(recipe, favorites.contains(id));
    println!("\nAstuce: {}", random_tip(&mut rand::thread_rng()));
    Ok(())
}

/// Print the `limit` recipes best covered by the fridge
pub fn rank(service: &InventoryService, limit: usize) {
    let ranked = rank_by_fridge(service.inventory());
    info!(recipes = ranked.len(), "Ranked recipes against fridge");
    for found in ranked.iter().take(limit) {
        display_match(found);
    }
}

/// Print a random recipe
pub fn random() {
    if let Some(recipe) = random_recipe(&mut rand::thread_rng()) {
        display_recipe_line(recipe, false);
    }
}

/// Star or unstar a recipe
pub fn favorite(store: &dyn KeyValueStore, id: &str) -> Result<()> {
    let mut favorites = Favorites::load(store);
    let starred = favorites.toggle(id)?;
    favorites.save(store)?;
    println!(
        "Recipe {id} {}",
        if starred {
            "added to favorites"
        } else {
            "removed from favorites"
        }
    );
    Ok(())
}

/// Print starred recipes
pub fn favorites(store: &dyn KeyValueStore) {
    let favorites = Favorites::load(store);
    let recipes = favorites.recipes();
    if recipes.is_empty() {
        println!("No favorite recipe yet");
    }
    for recipe in recipes {
        display_recipe_line(recipe, true);
    }
}

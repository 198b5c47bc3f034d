// ABOUTME: Recipe catalog, search, and fridge-aware suggestions
// ABOUTME: Parses ingredient lines into base-unit amounts comparable with inventory entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

//! # Recipes Module
//!
//! Budget recipes for students, searchable by title or ingredient, and ranked
//! against what is currently in the fridge.
//!
//! ## Key Features
//!
//! - Ingredient line parsing ("Pâtes (250g)" → 250 g of "Pâtes")
//! - Case-insensitive search over titles and ingredient lines
//! - Fridge coverage ranking with missing and short ingredients
//! - Random recipe and tip picks
//! - Persisted favorites

/// Built-in recipes and tips
pub mod catalog;
/// Favorite recipes
pub mod favorites;
/// Search and fridge matching
pub mod matching;
/// Recipe data models
pub mod models;

pub use catalog::{all_recipes, find_recipe, COOKING_TIPS};
pub use favorites::Favorites;
pub use matching::{
    best_from_fridge, match_recipe, random_recipe, random_tip, rank_by_fridge, search_recipes,
    MatchedIngredient, RecipeMatch,
};
pub use models::{Difficulty, IngredientAmount, Recipe, RecipeIngredient};

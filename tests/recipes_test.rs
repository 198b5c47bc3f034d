// ABOUTME: Integration tests for the recipe catalog, search and fridge ranking
// ABOUTME: Validates ingredient line parsing, coverage ordering, random picks and favorites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use ymeal::constants::storage_keys;
use ymeal::errors::ErrorCode;
use ymeal::inventory::{Category, Inventory, NewIngredient, QuantityFormat};
use ymeal::recipes::{
    all_recipes, best_from_fridge, find_recipe, match_recipe, random_recipe, random_tip,
    rank_by_fridge, search_recipes, Difficulty, Favorites, RecipeIngredient, COOKING_TIPS,
};
use ymeal::storage::{KeyValueStore, MemoryStore};

fn fridge(items: &[(&str, f64, QuantityFormat)]) -> Inventory {
    let mut inventory = Inventory::new();
    for &(name, amount, format) in items {
        inventory
            .add_ingredient(NewIngredient::from_display(
                name,
                Category::Other,
                amount,
                format,
            ))
            .unwrap();
    }
    inventory
}

// ============================================================================
// Catalog and parsing
// ============================================================================

#[test]
fn test_catalog_contents() {
    assert_eq!(all_recipes().len(), 4);
    let carbonara = find_recipe("1").unwrap();
    assert_eq!(carbonara.title, "Pâtes Carbonara Express");
    assert_eq!(carbonara.difficulty, Difficulty::Easy);
    assert_eq!(carbonara.ingredients.len(), 5);
    assert!((carbonara.price_per_person() - 1.25).abs() < 1e-9);
    assert_eq!(find_recipe("3").unwrap().difficulty, Difficulty::VeryEasy);
    assert!(find_recipe("99").is_none());
}

#[test]
fn test_parse_amount_units() {
    let water = RecipeIngredient::parse("Eau (1L)");
    assert_eq!(water.name, "Eau");
    let amount = water.amount.unwrap();
    assert_eq!(amount.format, QuantityFormat::Milliliters);
    assert!((amount.quantity - 1000.0).abs() < f64::EPSILON);

    let eggs = RecipeIngredient::parse("Oeufs (2)");
    let amount = eggs.amount.unwrap();
    assert_eq!(amount.format, QuantityFormat::Count);
    assert!((amount.quantity - 2.0).abs() < f64::EPSILON);

    let flour = RecipeIngredient::parse("Farine (0,5 kg)");
    let amount = flour.amount.unwrap();
    assert_eq!(amount.format, QuantityFormat::Grams);
    assert!((amount.quantity - 500.0).abs() < f64::EPSILON);

    let cream = RecipeIngredient::parse("Crème (20cl)");
    assert!((cream.amount.unwrap().quantity - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_parse_without_amount_keeps_line() {
    let pepper = RecipeIngredient::parse("Poivre");
    assert_eq!(pepper.name, "Poivre");
    assert!(pepper.amount.is_none());

    let odd = RecipeIngredient::parse("Sucre (2 tasses)");
    assert_eq!(odd.name, "Sucre (2 tasses)");
    assert!(odd.amount.is_none());
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_title_and_ingredients() {
    let by_title: Vec<&str> = search_recipes("wok").iter().map(|r| r.id.as_str()).collect();
    assert_eq!(by_title, vec!["4"]);

    let by_ingredient: Vec<&str> = search_recipes("CAROTTES")
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(by_ingredient, vec!["2"]);

    assert_eq!(search_recipes("").len(), all_recipes().len());
    assert!(search_recipes("sushi").is_empty());
}

// ============================================================================
// Fridge matching
// ============================================================================

#[test]
fn test_match_reports_missing_and_short() {
    let inventory = fridge(&[
        ("Pâtes", 100.0, QuantityFormat::Grams),
        ("Oeufs", 6.0, QuantityFormat::Count),
        ("Parmesan", 200.0, QuantityFormat::Grams),
    ]);
    let carbonara = find_recipe("1").unwrap();

    let found = match_recipe(carbonara, &inventory);

    assert_eq!(found.matched.len(), 3);
    assert_eq!(found.missing.len(), 2);
    assert!((found.coverage - 0.6).abs() < 1e-9);
    let short: Vec<&str> = found.short().map(|m| m.ingredient.name.as_str()).collect();
    assert_eq!(short, vec!["Pâtes"]);
    assert!(!found.is_complete());
}

#[test]
fn test_match_ignores_accents_and_plurals() {
    let inventory = fridge(&[
        ("pates", 500.0, QuantityFormat::Grams),
        ("Lardons", 150.0, QuantityFormat::Grams),
        ("oeuf", 4.0, QuantityFormat::Count),
        ("Parmesan", 50.0, QuantityFormat::Grams),
        ("Poivre", 1.0, QuantityFormat::Count),
    ]);

    let found = match_recipe(find_recipe("1").unwrap(), &inventory);

    assert!(found.missing.is_empty());
    assert!(found.is_complete());
    assert!((found.coverage - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_rank_orders_by_coverage_then_rating() {
    let inventory = fridge(&[
        ("Riz", 1.0, QuantityFormat::Kilograms),
        ("Ail", 3.0, QuantityFormat::Count),
        ("Salade", 1.0, QuantityFormat::Count),
    ]);

    let ranked = rank_by_fridge(&inventory);
    let ids: Vec<&str> = ranked.iter().map(|m| m.recipe.id.as_str()).collect();

    // wok 2/4, salad 1/5, then zero coverage by rating: carbonara 4.7, soup 4.5
    assert_eq!(ids, vec!["4", "3", "1", "2"]);
    assert!(ranked.windows(2).all(|w| w[0].coverage >= w[1].coverage));
    assert_eq!(best_from_fridge(&inventory).unwrap().recipe.id, "4");
}

#[test]
fn test_empty_fridge_ranks_by_rating() {
    let ranked = rank_by_fridge(&Inventory::new());
    let ids: Vec<&str> = ranked.iter().map(|m| m.recipe.id.as_str()).collect();
    assert_eq!(ids, vec!["4", "1", "2", "3"]);
    assert!(ranked.iter().all(|m| m.matched.is_empty()));
}

#[test]
fn test_random_picks_come_from_catalog() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10 {
        let recipe = random_recipe(&mut rng).unwrap();
        assert!(find_recipe(&recipe.id).is_some());
        assert!(COOKING_TIPS.contains(&random_tip(&mut rng)));
    }
}

// ============================================================================
// Favorites
// ============================================================================

#[test]
fn test_favorites_toggle_and_persist() {
    let store = MemoryStore::new();
    let mut favorites = Favorites::load(&store);
    assert!(favorites.ids().is_empty());

    assert!(favorites.toggle("2").unwrap());
    assert!(favorites.toggle("4").unwrap());
    assert!(!favorites.toggle("2").unwrap());
    favorites.save(&store).unwrap();

    let reloaded = Favorites::load(&store);
    assert_eq!(reloaded.ids(), ["4".to_owned()]);
    assert!(reloaded.contains("4"));
    assert_eq!(reloaded.recipes()[0].title, "Wok de Légumes");
}

#[test]
fn test_favorites_reject_unknown_recipe() {
    let mut favorites = Favorites::default();
    let err = favorites.toggle("42").unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert!(favorites.ids().is_empty());
}

#[test]
fn test_favorites_recover_from_bad_data() {
    let store = MemoryStore::new();
    store.set(storage_keys::FAVORITES, "oops").unwrap();
    assert!(Favorites::load(&store).ids().is_empty());

    store
        .set(storage_keys::FAVORITES, r#"["1","1","3"]"#)
        .unwrap();
    assert_eq!(Favorites::load(&store).ids(), ["1".to_owned(), "3".to_owned()]);
}

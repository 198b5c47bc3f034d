// ABOUTME: Choice lists offered by the profile configuration
// ABOUTME: Cuisines, vegetables and allergens with type-ahead suggestion filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

use ymeal_core::constants::limits::MAX_PROFILE_SUGGESTIONS;

/// Preferred cuisines
pub const CUISINES: [&str; 10] = [
    "Cuisine française",
    "Italienne",
    "Espagnole",
    "Grecque",
    "Indienne",
    "Japonaise",
    "Chinoise",
    "Américaine",
    "Street food",
    "Marocaine",
];

/// Vegetables a user may choose to avoid
pub const VEGETABLES: [&str; 29] = [
    "Aubergine",
    "Avocat",
    "Betterave",
    "Brocoli",
    "Carotte",
    "Chou-fleur",
    "Choux de Bruxelles",
    "Concombre",
    "Courgette",
    "Épinards",
    "Haricots verts",
    "Maïs",
    "Oignon",
    "Poireau",
    "Poivron",
    "Pomme de terre",
    "Potiron",
    "Salade",
    "Tomate",
    "Radis",
    "Navet",
    "Céleri",
    "Asperge",
    "Artichaut",
    "Fenouil",
    "Chou",
    "Groseille",
    "Laitue",
    "Roquette",
];

/// Known allergens
pub const ALLERGIES: [&str; 30] = [
    "Arachides",
    "Fruits à coque",
    "Lait",
    "Œufs",
    "Poisson",
    "Crustacés",
    "Soja",
    "Gluten",
    "Sésame",
    "Moutarde",
    "Sulfites",
    "Céleri",
    "Lupin",
    "Mollusques",
    "Graines de pavot",
    "Fruits de mer",
    "Blé",
    "Orge",
    "Riz",
    "Maïs",
    "Tomate",
    "Kiwi",
    "Banane",
    "Ananas",
    "Fraise",
    "Chocolat",
    "Café",
    "Levure",
    "Algues",
    "Noix de coco",
];

/// Whether `cuisine` is one of [`CUISINES`]
#[must_use]
pub fn is_known_cuisine(cuisine: &str) -> bool {
    CUISINES.iter().any(|c| c.eq_ignore_ascii_case(cuisine.trim()))
}

/// Entries of `catalog` containing `query`, skipping those already in `selected`
///
/// Case-insensitive. A blank query yields nothing.
#[must_use]
pub fn suggest(catalog: &[&'static str], query: &str, selected: &[String]) -> Vec<&'static str> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .copied()
        .filter(|item| {
            let lowered = item.to_lowercase();
            lowered.contains(&query) && !selected.iter().any(|s| s.to_lowercase() == lowered)
        })
        .take(MAX_PROFILE_SUGGESTIONS)
        .collect()
}

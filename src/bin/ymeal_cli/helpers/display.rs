// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal
// ABOUTME: Output formatting helpers for ymeal-cli
// ABOUTME: Consistent rendering of fridge groups, recipes, matches and the profile

use ymeal::inventory::{CategoryGroup, IngredientEntry, QuantityUpdate};
use ymeal::profile::{ProfileConfig, ProfileField};
use ymeal::recipes::{Recipe, RecipeMatch};

/// Print fridge entries under their category headings
pub fn display_groups(groups: &[CategoryGroup<'_>]) {
    if groups.is_empty() {
        println!("Fridge is empty");
        return;
    }
    for group in groups {
        println!("{} {}", group.category.emoji(), group.category);
        for entry in &group.entries {
            println!(
                "   {} {:<24} {:>10}   [{}]",
                entry.emoji,
                entry.name,
                entry.display_quantity(),
                entry.id
            );
        }
    }
}

/// Print the result of a quantity change
pub fn display_update(entry: Option<&IngredientEntry>, update: &QuantityUpdate) {
    match (update, entry) {
        (QuantityUpdate::Adjusted { .. }, Some(entry)) => {
            println!("{} {}: {}", entry.emoji, entry.name, entry.display_quantity());
        }
        (QuantityUpdate::Removed(removed), _) => {
            println!("{} {} is used up and was removed", removed.emoji, removed.name);
        }
        (QuantityUpdate::Rejected { .. }, Some(entry)) => {
            println!(
                "{} {}: quantity must stay a finite number, kept {}",
                entry.emoji,
                entry.name,
                entry.display_quantity()
            );
        }
        _ => println!("Ingredient not found"),
    }
}

/// Print a one-line recipe summary
pub fn display_recipe_line(recipe: &Recipe, favorite: bool) {
    println!(
        "{}[{}] {} - {} min, {:.2} € / pers, {:.1}/5",
        if favorite { "* " } else { "" },
        recipe.id,
        recipe.title,
        recipe.time_minutes,
        recipe.price_per_person(),
        recipe.rating
    );
}

/// Print a full recipe
pub fn display_recipe(recipe: &Recipe, favorite: bool) {
    println!("\n{}{}", recipe.title, if favorite { " *" } else { "" });
    println!("{}", "=".repeat(60));
    println!("{}", recipe.description);
    println!(
        "   {} min | {} kcal | {} | {:.1}/5 ({} avis) | {:.2} € pour {}",
        recipe.time_minutes,
        recipe.calories_kcal,
        recipe.difficulty.label(),
        recipe.rating,
        recipe.reviews,
        recipe.price_eur,
        recipe.people
    );

    println!("\nIngrédients:");
    for ingredient in &recipe.ingredients {
        println!("• {}", ingredient.line);
    }

    println!("\nPréparation:");
    for (index, step) in recipe.steps.iter().enumerate() {
        println!("{}. {step}", index + 1);
    }
}

/// Print how the fridge covers a recipe
pub fn display_match(found: &RecipeMatch) {
    println!(
        "\n{:>3.0}%  [{}] {}",
        found.coverage * 100.0,
        found.recipe.id,
        found.recipe.title
    );
    for matched in &found.matched {
        let mark = if matched.sufficient { "ok" } else { "short" };
        println!("   {mark:<6}{}", matched.ingredient.line);
    }
    for missing in &found.missing {
        println!("   {:<6}{}", "miss", missing.line);
    }
}

/// Print the profile and what it still lacks
pub fn display_profile(profile: &ProfileConfig) {
    let diets: Vec<String> = profile
        .diets
        .iter()
        .map(|d| format!("{} {}", d.icon(), d.label()))
        .collect();
    println!("Régimes: {}", diets.join(", "));
    println!("Ville: {}", profile.location);
    println!(
        "Budget: {}",
        profile.budget.map_or("-", |b| b.label())
    );
    println!("Cuisine: {}", profile.cuisine.as_deref().unwrap_or("-"));
    println!("À éviter: {}", profile.avoid_veg.join(", "));
    println!("Allergies: {}", profile.allergies.join(", "));
    println!("Personnes: {}", profile.people.map_or("-", |p| p.key()));

    let missing = profile.missing_fields();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(ProfileField::name).collect();
        println!("\nÀ compléter: {}", names.join(", "));
    }
}

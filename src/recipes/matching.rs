// ABOUTME: Recipe search and fridge-based recipe ranking
// ABOUTME: Matches recipe ingredient lines against inventory entries by folded name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::catalog::{all_recipes, COOKING_TIPS};
use super::models::{Recipe, RecipeIngredient};
use crate::inventory::{IngredientEntry, IngredientId, Inventory};

/// Recipe ingredient found in the fridge
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedIngredient {
    /// Ingredient line of the recipe
    pub ingredient: &'static RecipeIngredient,
    /// Fridge entry covering it
    pub entry_id: IngredientId,
    /// False when both sides share a unit dimension and the fridge holds less
    pub sufficient: bool,
}

/// How well the fridge covers one recipe
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeMatch {
    /// Ranked recipe
    pub recipe: &'static Recipe,
    /// Ingredients present in the fridge
    pub matched: Vec<MatchedIngredient>,
    /// Ingredients absent from the fridge
    pub missing: Vec<&'static RecipeIngredient>,
    /// Share of ingredient lines present, from 0.0 to 1.0
    pub coverage: f64,
}

impl RecipeMatch {
    /// Matched ingredients the fridge does not hold enough of
    pub fn short(&self) -> impl Iterator<Item = &MatchedIngredient> {
        self.matched.iter().filter(|m| !m.sufficient)
    }

    /// Whether every ingredient is present in sufficient quantity
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.short().next().is_none()
    }
}

/// Recipes whose title or ingredient lines contain `query`
///
/// A blank query returns the whole catalog.
#[must_use]
pub fn search_recipes(query: &str) -> Vec<&'static Recipe> {
    all_recipes()
        .iter()
        .filter(|recipe| recipe.matches_query(query))
        .collect()
}

/// Rank every catalog recipe by how much of it the fridge covers
///
/// Ordered by coverage, then rating, both descending.
#[must_use]
pub fn rank_by_fridge(inventory: &Inventory) -> Vec<RecipeMatch> {
    let mut ranked: Vec<RecipeMatch> = all_recipes()
        .iter()
        .map(|recipe| match_recipe(recipe, inventory))
        .collect();
    ranked.sort_by(|a, b| {
        b.coverage
            .total_cmp(&a.coverage)
            .then_with(|| b.recipe.rating.total_cmp(&a.recipe.rating))
    });
    ranked
}

/// Best recipe for what is in the fridge
#[must_use]
pub fn best_from_fridge(inventory: &Inventory) -> Option<RecipeMatch> {
    let best = rank_by_fridge(inventory).into_iter().next();
    if let Some(found) = &best {
        debug!(
            recipe = %found.recipe.id,
            coverage = found.coverage,
            "Selected recipe from fridge"
        );
    }
    best
}

/// Score one recipe against the fridge
#[must_use]
pub fn match_recipe(recipe: &'static Recipe, inventory: &Inventory) -> RecipeMatch {
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for ingredient in &recipe.ingredients {
        match find_entry(inventory, &ingredient.name) {
            Some(entry) => matched.push(MatchedIngredient {
                ingredient,
                entry_id: entry.id.clone(),
                sufficient: is_sufficient(ingredient, entry),
            }),
            None => missing.push(ingredient),
        }
    }
    let total = recipe.ingredients.len();
    let coverage = if total == 0 {
        0.0
    } else {
        matched.len() as f64 / total as f64
    };
    RecipeMatch {
        recipe,
        matched,
        missing,
        coverage,
    }
}

/// Pick a catalog recipe uniformly at random
pub fn random_recipe<R: Rng + ?Sized>(rng: &mut R) -> Option<&'static Recipe> {
    all_recipes().choose(rng)
}

/// Pick a cooking tip uniformly at random
pub fn random_tip<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    COOKING_TIPS.choose(rng).copied().unwrap_or(COOKING_TIPS[0])
}

fn is_sufficient(ingredient: &RecipeIngredient, entry: &IngredientEntry) -> bool {
    match ingredient.amount {
        Some(amount) if entry.format.is_compatible_with(amount.format) => {
            entry.quantity >= amount.quantity
        }
        _ => true,
    }
}

fn find_entry<'a>(inventory: &'a Inventory, name: &str) -> Option<&'a IngredientEntry> {
    let wanted = words(name);
    inventory
        .entries()
        .iter()
        .find(|entry| names_match(&wanted, &words(&entry.name)))
}

/// Two names match when every word of the shorter one matches a word of the
/// longer one, ignoring case, accents and a trailing plural "s"
fn names_match(a: &[String], b: &[String]) -> bool {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    !short.is_empty()
        && short
            .iter()
            .all(|word| long.iter().any(|other| word_match(word, other)))
}

fn word_match(a: &str, b: &str) -> bool {
    a == b || a.strip_suffix('s') == Some(b) || b.strip_suffix('s') == Some(a)
}

fn words(name: &str) -> Vec<String> {
    fold(name)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Lowercase and strip the accents used in French ingredient names
pub(crate) fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'à' | 'â' | 'ä' => 'a',
            'ç' => 'c',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ÿ' => 'y',
            other => other,
        })
        .collect::<String>()
        .replace('œ', "oe")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(name: &str) -> Vec<String> {
        words(name)
    }

    #[test]
    fn test_fold_accents() {
        assert_eq!(fold("Pâtes"), "pates");
        assert_eq!(fold("Œufs"), "oeufs");
        assert_eq!(fold("Maïs"), "mais");
    }

    #[test]
    fn test_names_match_plural_and_extra_words() {
        assert!(names_match(&w("Oeufs"), &w("Oeuf dur")));
        assert!(names_match(&w("Tomate"), &w("Tomates")));
        assert!(names_match(&w("Pates"), &w("Pâtes")));
        assert!(!names_match(&w("Ail"), &w("Salade")));
        assert!(!names_match(&w("Lait"), &w("Lardons ou Bacon")));
    }
}

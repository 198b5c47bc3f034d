// ABOUTME: Data models for the recipe catalog and ingredient lines
// ABOUTME: Parses lines such as "Pâtes (250g)" into a name and a base-unit amount
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ymeal_core::constants::units::{GRAMS_PER_KG, ML_PER_CL, ML_PER_L};

use crate::inventory::units::QuantityFormat;

/// Recipe difficulty as shown on recipe cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    /// No cooking skill needed
    #[serde(rename = "Très facile")]
    VeryEasy,
    /// Basic techniques
    #[default]
    #[serde(rename = "Facile")]
    Easy,
    /// Some technique required
    #[serde(rename = "Moyen")]
    Medium,
}

impl Difficulty {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Très facile",
            Self::Easy => "Facile",
            Self::Medium => "Moyen",
        }
    }
}

/// Amount attached to a recipe ingredient line, in base units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IngredientAmount {
    /// Quantity in the base unit of `format`
    pub quantity: f64,
    /// Unit family the quantity is expressed in
    pub format: QuantityFormat,
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Line exactly as written in the recipe
    pub line: String,
    /// Ingredient name without the amount
    pub name: String,
    /// Parsed amount, when the line gives one
    pub amount: Option<IngredientAmount>,
}

// "Name (250g)", "Name (2)", "Name (1L)", "Name (1.5 kg)"
static LINE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<name>.+?)\s*\(\s*(?P<qty>\d+(?:[.,]\d+)?)\s*(?P<unit>[A-Za-z]*)\s*\)\s*$")
        .ok()
});

impl RecipeIngredient {
    /// Parse an ingredient line
    ///
    /// Amounts are normalized the same way fridge entries are: kilograms to
    /// grams, centiliters and liters to milliliters. A line without a
    /// recognised amount keeps its whole text as the name.
    ///
    /// ```rust
    /// use ymeal::inventory::QuantityFormat;
    /// use ymeal::recipes::RecipeIngredient;
    ///
    /// let pasta = RecipeIngredient::parse("Pâtes (250g)");
    /// assert_eq!(pasta.name, "Pâtes");
    /// let amount = pasta.amount.unwrap();
    /// assert_eq!(amount.quantity, 250.0);
    /// assert_eq!(amount.format, QuantityFormat::Grams);
    ///
    /// assert!(RecipeIngredient::parse("Poivre").amount.is_none());
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let parsed = LINE_PATTERN.as_ref().and_then(|re| re.captures(line)).and_then(|caps| {
            let name = caps.name("name")?.as_str().trim();
            let quantity: f64 = caps.name("qty")?.as_str().replace(',', ".").parse().ok()?;
            let unit = caps.name("unit").map_or("", |m| m.as_str());
            let amount = normalize_amount(quantity, unit)?;
            Some((name.to_owned(), amount))
        });

        match parsed {
            Some((name, amount)) => Self {
                line: line.to_owned(),
                name,
                amount: Some(amount),
            },
            None => Self {
                line: line.to_owned(),
                name: line.trim().to_owned(),
                amount: None,
            },
        }
    }
}

fn normalize_amount(quantity: f64, unit: &str) -> Option<IngredientAmount> {
    let (quantity, format) = match unit.to_lowercase().as_str() {
        "" => (quantity, QuantityFormat::Count),
        "g" => (quantity, QuantityFormat::Grams),
        "kg" => (quantity * GRAMS_PER_KG, QuantityFormat::Grams),
        "ml" => (quantity, QuantityFormat::Milliliters),
        "cl" => (quantity * ML_PER_CL, QuantityFormat::Milliliters),
        "l" => (quantity * ML_PER_L, QuantityFormat::Milliliters),
        _ => return None,
    };
    Some(IngredientAmount { quantity, format })
}

/// A recipe from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Catalog identifier
    pub id: String,
    /// Title
    pub title: String,
    /// Illustration URL
    pub image: String,
    /// Total preparation time
    pub time_minutes: u32,
    /// Energy per serving
    pub calories_kcal: u32,
    /// Difficulty
    pub difficulty: Difficulty,
    /// Average user rating out of 5
    pub rating: f64,
    /// Number of user reviews
    pub reviews: u32,
    /// Estimated total cost in euros
    pub price_eur: f64,
    /// Number of servings
    pub people: u32,
    /// Short pitch
    pub description: String,
    /// Ingredient lines
    pub ingredients: Vec<RecipeIngredient>,
    /// Preparation steps
    pub steps: Vec<String>,
}

impl Recipe {
    /// Whether the title or any ingredient line contains `query`, ignoring case
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self
                .ingredients
                .iter()
                .any(|ingredient| ingredient.line.to_lowercase().contains(&query))
    }

    /// Estimated cost per serving in euros
    #[must_use]
    pub fn price_per_person(&self) -> f64 {
        if self.people == 0 {
            return self.price_eur;
        }
        self.price_eur / f64::from(self.people)
    }
}

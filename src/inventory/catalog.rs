// ABOUTME: Static ingredient categories and suggestion templates for the fridge
// ABOUTME: Maps each category to its default display format and glyph
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::units::QuantityFormat;

/// Ingredient category shown as a group heading in the fridge
///
/// Serialized with the French labels used by the persisted inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Vegetables
    #[serde(rename = "Légumes")]
    Vegetables,
    /// Fruits
    #[serde(rename = "Fruits")]
    Fruits,
    /// Dairy products
    #[serde(rename = "Produits laitiers")]
    Dairy,
    /// Meats
    #[serde(rename = "Viandes")]
    Meats,
    /// Cereals and starches
    #[serde(rename = "Céréales & Féculents")]
    Starches,
    /// Liquids
    #[serde(rename = "Liquides")]
    Liquids,
    /// Oils and fats
    #[serde(rename = "Matières grasses")]
    Fats,
    /// Sweet products
    #[serde(rename = "Produits sucrés", alias = "Produits sucrés ")]
    Sweets,
    /// Anything else, including labels this version does not know
    #[serde(rename = "Autre")]
    #[serde(other)]
    Other,
}

/// Presentation data attached to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    /// Category this row describes
    pub category: Category,
    /// Display glyph
    pub emoji: &'static str,
    /// Format new entries of this category start with
    pub default_format: QuantityFormat,
}

const CATEGORIES: [CategoryInfo; 9] = [
    CategoryInfo {
        category: Category::Vegetables,
        emoji: "🥬",
        default_format: QuantityFormat::Count,
    },
    CategoryInfo {
        category: Category::Fruits,
        emoji: "🍎",
        default_format: QuantityFormat::Count,
    },
    CategoryInfo {
        category: Category::Dairy,
        emoji: "🧀",
        default_format: QuantityFormat::Grams,
    },
    CategoryInfo {
        category: Category::Meats,
        emoji: "🥩",
        default_format: QuantityFormat::Grams,
    },
    CategoryInfo {
        category: Category::Starches,
        emoji: "🍞",
        default_format: QuantityFormat::Grams,
    },
    CategoryInfo {
        category: Category::Liquids,
        emoji: "💧",
        default_format: QuantityFormat::Milliliters,
    },
    CategoryInfo {
        category: Category::Fats,
        emoji: "🧴",
        default_format: QuantityFormat::Milliliters,
    },
    CategoryInfo {
        category: Category::Sweets,
        emoji: "🍦",
        default_format: QuantityFormat::Grams,
    },
    CategoryInfo {
        category: Category::Other,
        emoji: "🛒",
        default_format: QuantityFormat::Count,
    },
];

impl Category {
    /// Every category, in display order
    pub const ALL: [Self; 9] = [
        Self::Vegetables,
        Self::Fruits,
        Self::Dairy,
        Self::Meats,
        Self::Starches,
        Self::Liquids,
        Self::Fats,
        Self::Sweets,
        Self::Other,
    ];

    /// Presentation data for this category
    #[must_use]
    pub fn info(&self) -> &'static CategoryInfo {
        // CATEGORIES mirrors ALL index for index
        &CATEGORIES[*self as usize]
    }

    /// Display glyph
    #[must_use]
    pub fn emoji(&self) -> &'static str {
        self.info().emoji
    }

    /// Format new entries of this category start with
    #[must_use]
    pub fn default_format(&self) -> QuantityFormat {
        self.info().default_format
    }

    /// Persisted label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Vegetables => "Légumes",
            Self::Fruits => "Fruits",
            Self::Dairy => "Produits laitiers",
            Self::Meats => "Viandes",
            Self::Starches => "Céréales & Féculents",
            Self::Liquids => "Liquides",
            Self::Fats => "Matières grasses",
            Self::Sweets => "Produits sucrés",
            Self::Other => "Autre",
        }
    }

    /// Parse a label case-insensitively, falling back to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.label().to_lowercase() == normalized)
            .unwrap_or(Self::Other)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// Ingredient offered in the fridge search box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    /// Display name
    pub name: &'static str,
    /// Category the ingredient is filed under
    pub category: Category,
    /// Display glyph
    pub emoji: &'static str,
}

const fn suggestion(name: &'static str, category: Category, emoji: &'static str) -> Suggestion {
    Suggestion {
        name,
        category,
        emoji,
    }
}

static SUGGESTIONS: [Suggestion; 9] = [
    suggestion("Lait", Category::Liquids, "🥛"),
    suggestion("Fromage", Category::Dairy, "🧀"),
    suggestion("Oeufs", Category::Dairy, "🥚"),
    suggestion("Riz", Category::Starches, "🍚"),
    suggestion("Pates", Category::Starches, "🍝"),
    suggestion("Poulet", Category::Meats, "🍗"),
    suggestion("Carottes", Category::Vegetables, "🥕"),
    suggestion("Tomates", Category::Vegetables, "🍅"),
    suggestion("Huile d'olive", Category::Fats, "🫒"),
];

/// All suggestion templates
#[must_use]
pub fn suggestions() -> &'static [Suggestion] {
    &SUGGESTIONS
}

/// Find a suggestion by exact name, ignoring case
#[must_use]
pub fn find_suggestion(name: &str) -> Option<&'static Suggestion> {
    let normalized = name.trim().to_lowercase();
    SUGGESTIONS
        .iter()
        .find(|s| s.name.to_lowercase() == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_table_matches_variants() {
        for category in Category::ALL {
            assert_eq!(category.info().category, category);
        }
    }

    #[test]
    fn test_legacy_and_unknown_labels() {
        let legacy: Category = serde_json::from_str("\"Produits sucrés \"").unwrap();
        assert_eq!(legacy, Category::Sweets);
        let unknown: Category = serde_json::from_str("\"Surgelés\"").unwrap();
        assert_eq!(unknown, Category::Other);
        assert_eq!(
            serde_json::to_string(&Category::Liquids).unwrap(),
            "\"Liquides\""
        );
    }

    #[test]
    fn test_default_formats() {
        assert_eq!(Category::Liquids.default_format(), QuantityFormat::Milliliters);
        assert_eq!(Category::Vegetables.default_format(), QuantityFormat::Count);
        assert_eq!(Category::Meats.default_format(), QuantityFormat::Grams);
    }

    #[test]
    fn test_find_suggestion_ignores_case() {
        let found = find_suggestion("  lait ").unwrap();
        assert_eq!(found.category, Category::Liquids);
        assert!(find_suggestion("caviar").is_none());
    }
}

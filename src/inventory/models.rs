// ABOUTME: Data models for fridge inventory entries and mutation outcomes
// ABOUTME: Defines IngredientEntry, NewIngredient, AddOutcome, and QuantityUpdate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use uuid::Uuid;

use super::catalog::{Category, Suggestion};
use super::units::{convert_to_base, display_quantity, step_for, QuantityFormat};
use ymeal_core::constants::units::{SUGGESTION_DEFAULT_COUNT, SUGGESTION_DEFAULT_MEASURED};

/// Opaque identifier of an inventory entry
///
/// New identifiers are UUID v4 strings, but any string read back from storage
/// is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(String);

impl IngredientId {
    /// Generate a fresh identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IngredientId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for IngredientId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for IngredientId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// One ingredient held in the fridge
///
/// The serialized field set is the persisted record layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientEntry {
    /// Stable identifier assigned at creation
    pub id: IngredientId,
    /// Display name, also the case-insensitive merge key
    pub name: String,
    /// Category, fixed after creation
    pub category: Category,
    /// Display glyph
    pub emoji: String,
    /// Amount in the base unit of `format`
    pub quantity: f64,
    /// Display unit, fixed after creation
    pub format: QuantityFormat,
}

impl IngredientEntry {
    /// Whether `name` designates this ingredient
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }

    /// Quantity rendered in the entry's display unit
    #[must_use]
    pub fn display_quantity(&self) -> String {
        display_quantity(self.quantity, self.format)
    }

    /// Adjustment step of the entry's format, in base units
    #[must_use]
    pub const fn step(&self) -> f64 {
        step_for(self.format)
    }
}

/// Candidate passed to `Inventory::add_ingredient`
///
/// `quantity` is already expressed in the base unit of `format`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIngredient {
    /// Display name
    pub name: String,
    /// Category
    pub category: Category,
    /// Display glyph
    pub emoji: String,
    /// Amount in base units
    pub quantity: f64,
    /// Display unit
    pub format: QuantityFormat,
}

impl NewIngredient {
    /// Build a candidate from a displayed amount, converting it to base units
    #[must_use]
    pub fn from_display(
        name: impl Into<String>,
        category: Category,
        amount: f64,
        format: QuantityFormat,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            emoji: category.emoji().to_owned(),
            quantity: convert_to_base(amount, format),
            format,
        }
    }

    /// Candidate for a suggestion template with the category's default amount
    ///
    /// Count formats start at one item, every other format at 200 of its
    /// display unit.
    #[must_use]
    pub fn from_suggestion(suggestion: &Suggestion) -> Self {
        let format = suggestion.category.default_format();
        let amount = if format == QuantityFormat::Count {
            SUGGESTION_DEFAULT_COUNT
        } else {
            SUGGESTION_DEFAULT_MEASURED
        };
        Self {
            name: suggestion.name.to_owned(),
            category: suggestion.category,
            emoji: suggestion.emoji.to_owned(),
            quantity: convert_to_base(amount, format),
            format,
        }
    }
}

/// Result of adding a candidate to the inventory
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// Quantity was summed into an existing entry with the same name
    Merged {
        /// Entry that received the quantity
        id: IngredientId,
        /// Quantity after the merge, in base units
        quantity: f64,
    },
    /// A new entry was inserted
    Created {
        /// Identifier of the new entry
        id: IngredientId,
    },
    /// An entry with the same name exists in a different unit dimension
    UnitMismatchRejected {
        /// Entry that blocked the merge
        existing_id: IngredientId,
        /// Format of the existing entry
        existing_format: QuantityFormat,
        /// Format of the rejected candidate
        candidate_format: QuantityFormat,
    },
}

impl AddOutcome {
    /// Identifier of the entry that now holds the candidate, if any
    #[must_use]
    pub const fn id(&self) -> Option<&IngredientId> {
        match self {
            Self::Merged { id, .. } | Self::Created { id } => Some(id),
            Self::UnitMismatchRejected { .. } => None,
        }
    }

    /// Whether the inventory changed
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        !matches!(self, Self::UnitMismatchRejected { .. })
    }
}

/// Result of adjusting an entry's quantity
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityUpdate {
    /// Entry kept with its new quantity
    Adjusted {
        /// Quantity after the adjustment, in base units
        quantity: f64,
    },
    /// Quantity reached zero or below and the entry was dropped
    Removed(IngredientEntry),
    /// Delta was not finite or would overflow; the entry is unchanged
    Rejected {
        /// Quantity the entry still holds, in base units
        quantity: f64,
    },
    /// No entry carries the given identifier
    NotFound,
}

impl QuantityUpdate {
    /// Whether the inventory changed
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Adjusted { .. } | Self::Removed(_))
    }
}

/// Entries of one category, in inventory order
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a> {
    /// Category of every entry in the group
    pub category: Category,
    /// Entries in insertion order
    pub entries: Vec<&'a IngredientEntry>,
}

// ABOUTME: Fridge inventory module: units, catalogs, the entry collection, and its service
// ABOUTME: Owns merge-on-add semantics and base-unit quantity normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

//! # Inventory Module
//!
//! Tracks what is in the fridge. Every quantity is stored in the base unit of
//! its format (units, grams or milliliters) and rendered back in the display
//! unit the user picked.
//!
//! ## Key Features
//!
//! - Unit normalization (kg → g, cl → ml) and display formatting
//! - Merge-on-add keyed by case-insensitive name, rejecting unit-dimension mismatches
//! - Step-based quantity adjustment that drops entries reaching zero
//! - Category grouping and suggestion search
//! - `InventoryService`, the single owner that persists after each mutation
//!
//! ## Example Usage
//!
//! ```rust
//! use ymeal::inventory::{AddOutcome, Category, Inventory, NewIngredient, QuantityFormat};
//!
//! let mut fridge = Inventory::new();
//! let milk = NewIngredient::from_display("Lait", Category::Liquids, 200.0, QuantityFormat::Milliliters);
//! fridge.add_ingredient(milk).unwrap();
//!
//! let more = NewIngredient::from_display("lait", Category::Liquids, 300.0, QuantityFormat::Milliliters);
//! let outcome = fridge.add_ingredient(more).unwrap();
//! assert!(matches!(outcome, AddOutcome::Merged { .. }));
//! assert_eq!(fridge.entries()[0].display_quantity(), "500 ml");
//! ```

/// Static categories and suggestion templates
pub mod catalog;
/// Entry collection with merge and adjustment rules
pub mod collection;
/// Entry, candidate and outcome types
pub mod models;
/// Persisting owner of the inventory
pub mod service;
/// Quantity formats and unit conversion
pub mod units;

pub use catalog::{find_suggestion, suggestions, Category, CategoryInfo, Suggestion};
pub use collection::Inventory;
pub use models::{
    AddOutcome, CategoryGroup, IngredientEntry, IngredientId, NewIngredient, QuantityUpdate,
};
pub use service::{DisplayRow, InventoryService};
pub use units::{
    convert_from_base, convert_to_base, display_quantity, step_for, QuantityFormat, UnitDimension,
};

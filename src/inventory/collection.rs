// ABOUTME: In-memory fridge inventory with merge-on-add and quantity adjustment
// ABOUTME: Enforces one entry per case-insensitive name and no zero or negative quantities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

use tracing::{debug, warn};
use ymeal_core::errors::{AppError, AppResult};

use super::catalog::{suggestions, Suggestion};
use super::models::{
    AddOutcome, CategoryGroup, IngredientEntry, IngredientId, NewIngredient, QuantityUpdate,
};
use super::units::step_for;

/// Ordered collection of ingredient entries
///
/// Insertion order only drives display grouping. Invariants held at all
/// times:
/// - every quantity is finite and strictly positive
/// - no two entries share a name under case folding
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    entries: Vec<IngredientEntry>,
}

impl Inventory {
    /// Create an empty inventory
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rebuild an inventory from loaded records
    ///
    /// Records with non-finite or non-positive quantities are dropped. A later
    /// record reusing a name is merged into the first one when the formats are
    /// compatible and dropped otherwise.
    #[must_use]
    pub fn from_entries(records: Vec<IngredientEntry>) -> Self {
        let mut inventory = Self::new();
        for record in records {
            if !record.quantity.is_finite() || record.quantity <= 0.0 {
                warn!(
                    id = %record.id,
                    quantity = record.quantity,
                    "Dropping stored ingredient with unusable quantity"
                );
                continue;
            }
            match inventory.position_by_name(&record.name) {
                Some(index) => {
                    let existing = &mut inventory.entries[index];
                    if existing.format.is_compatible_with(record.format) {
                        existing.quantity += record.quantity;
                    } else {
                        warn!(
                            name = %record.name,
                            "Dropping duplicate stored ingredient with incompatible unit"
                        );
                    }
                }
                None => inventory.entries.push(record),
            }
        }
        inventory
    }

    /// All entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[IngredientEntry] {
        &self.entries
    }

    /// Consume the inventory, yielding its entries
    #[must_use]
    pub fn into_entries(self) -> Vec<IngredientEntry> {
        self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the inventory holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by identifier
    #[must_use]
    pub fn get(&self, id: &IngredientId) -> Option<&IngredientEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Look up an entry by case-insensitive name
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&IngredientEntry> {
        self.position_by_name(name).map(|index| &self.entries[index])
    }

    fn position_by_name(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.matches_name(name))
    }

    fn position(&self, id: &IngredientId) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.id == id)
    }

    /// Add a candidate, merging into an existing entry with the same name
    ///
    /// The candidate's quantity must already be in base units. On merge the
    /// existing entry keeps its format, category and glyph; a candidate whose
    /// unit dimension differs from the existing entry is rejected and nothing
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the name is blank or the quantity is not a
    /// finite, strictly positive number.
    pub fn add_ingredient(&mut self, candidate: NewIngredient) -> AppResult<AddOutcome> {
        let name = candidate.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Ingredient name must not be empty"));
        }
        if !candidate.quantity.is_finite() || candidate.quantity <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Quantity for {name} must be a positive number, got {}",
                candidate.quantity
            )));
        }

        if let Some(index) = self.position_by_name(name) {
            let existing = &mut self.entries[index];
            if !existing.format.is_compatible_with(candidate.format) {
                debug!(
                    id = %existing.id,
                    existing = %existing.format,
                    candidate = %candidate.format,
                    "Rejected merge across unit dimensions"
                );
                return Ok(AddOutcome::UnitMismatchRejected {
                    existing_id: existing.id.clone(),
                    existing_format: existing.format,
                    candidate_format: candidate.format,
                });
            }
            let merged = existing.quantity + candidate.quantity;
            if !merged.is_finite() {
                return Err(AppError::invalid_input(format!(
                    "Quantity for {name} would overflow"
                ))
                .with_resource_id(existing.id.as_str()));
            }
            existing.quantity = merged;
            debug!(id = %existing.id, quantity = existing.quantity, "Merged ingredient");
            return Ok(AddOutcome::Merged {
                id: existing.id.clone(),
                quantity: existing.quantity,
            });
        }

        let entry = IngredientEntry {
            id: IngredientId::generate(),
            name: name.to_owned(),
            category: candidate.category,
            emoji: candidate.emoji,
            quantity: candidate.quantity,
            format: candidate.format,
        };
        let id = entry.id.clone();
        debug!(id = %id, name = %entry.name, "Created ingredient");
        self.entries.push(entry);
        Ok(AddOutcome::Created { id })
    }

    /// Add a suggestion template with its category's default amount
    ///
    /// # Errors
    ///
    /// Propagates validation errors from [`Inventory::add_ingredient`].
    pub fn add_suggestion(&mut self, suggestion: &Suggestion) -> AppResult<AddOutcome> {
        self.add_ingredient(NewIngredient::from_suggestion(suggestion))
    }

    /// Shift an entry's quantity by `delta` base units
    ///
    /// An entry whose quantity ends at zero or below is removed. A non-finite
    /// delta, or one that overflows the quantity, leaves the entry unchanged.
    pub fn update_quantity(&mut self, id: &IngredientId, delta: f64) -> QuantityUpdate {
        let Some(index) = self.position(id) else {
            debug!(id = %id, "Quantity update for unknown ingredient ignored");
            return QuantityUpdate::NotFound;
        };

        let entry = &mut self.entries[index];
        let quantity = entry.quantity + delta;
        if !delta.is_finite() || !quantity.is_finite() {
            debug!(id = %id, delta, "Rejected non-finite quantity update");
            return QuantityUpdate::Rejected {
                quantity: entry.quantity,
            };
        }
        if quantity > 0.0 {
            entry.quantity = quantity;
            return QuantityUpdate::Adjusted { quantity };
        }

        let removed = self.entries.remove(index);
        debug!(id = %removed.id, "Ingredient removed after reaching zero");
        QuantityUpdate::Removed(removed)
    }

    /// Raise an entry by one step of its format
    pub fn increment(&mut self, id: &IngredientId) -> QuantityUpdate {
        match self.get(id).map(|entry| step_for(entry.format)) {
            Some(step) => self.update_quantity(id, step),
            None => QuantityUpdate::NotFound,
        }
    }

    /// Lower an entry by one step of its format
    pub fn decrement(&mut self, id: &IngredientId) -> QuantityUpdate {
        match self.get(id).map(|entry| step_for(entry.format)) {
            Some(step) => self.update_quantity(id, -step),
            None => QuantityUpdate::NotFound,
        }
    }

    /// Remove an entry, returning it when it existed
    pub fn remove_ingredient(&mut self, id: &IngredientId) -> Option<IngredientEntry> {
        let index = self.position(id)?;
        Some(self.entries.remove(index))
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Partition entries by category
    ///
    /// Groups appear in the order their category is first seen; entries keep
    /// their relative order. Empty categories are omitted.
    #[must_use]
    pub fn group_by_category(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
        for entry in &self.entries {
            match groups.iter().position(|g| g.category == entry.category) {
                Some(index) => groups[index].entries.push(entry),
                None => groups.push(CategoryGroup {
                    category: entry.category,
                    entries: vec![entry],
                }),
            }
        }
        groups
    }

    /// Suggestions whose name contains `query` and that are not stocked yet
    ///
    /// Matching ignores case; a blank query yields nothing.
    #[must_use]
    pub fn filter_suggestions(&self, query: &str) -> Vec<&'static Suggestion> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        suggestions()
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&query))
            .filter(|s| self.position_by_name(s.name).is_none())
            .collect()
    }
}

// ABOUTME: Fridge commands for ymeal-cli
// ABOUTME: Handles list, add, suggest, step, adjust, remove and clear over the inventory service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

use std::sync::Arc;

use tracing::{info, warn};
use ymeal::config::AppConfig;
use ymeal::constants::units::{SUGGESTION_DEFAULT_COUNT, SUGGESTION_DEFAULT_MEASURED};
use ymeal::errors::{AppError, AppResult};
use ymeal::inventory::{
    find_suggestion, AddOutcome, Category, IngredientId, InventoryService, NewIngredient,
    QuantityFormat, QuantityUpdate,
};
use ymeal::storage::KeyValueStore;

use crate::helpers::display::{display_groups, display_update};

type Result<T> = AppResult<T>;

/// Load the inventory stored under the configured key
pub fn open(store: &Arc<dyn KeyValueStore>, config: &AppConfig) -> InventoryService {
    InventoryService::load_from(Arc::clone(store), config.inventory_key.clone())
}

/// Print every ingredient grouped by category
pub fn list(service: &InventoryService) {
    display_groups(&service.group_by_category());
}

/// Add an ingredient
///
/// A bare suggestion name with no overrides is added with the suggestion's
/// template. Otherwise missing options fall back to the category defaults.
pub fn add(
    service: &mut InventoryService,
    name: &str,
    quantity: Option<f64>,
    unit: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let suggestion = find_suggestion(name);

    let outcome = match (suggestion, quantity, &unit, &category) {
        (Some(template), None, None, None) => service.add_suggestion(template)?,
        _ => {
            let category = category
                .as_deref()
                .map(Category::from_str_lossy)
                .or_else(|| suggestion.map(|s| s.category))
                .unwrap_or(Category::Other);
            let format = match unit.as_deref() {
                Some(unit) => QuantityFormat::from_str_lossy(unit)
                    .ok_or_else(|| AppError::invalid_input(format!("Unknown unit '{unit}'")))?,
                None => category.default_format(),
            };
            let amount = quantity.unwrap_or(if format == QuantityFormat::Count {
                SUGGESTION_DEFAULT_COUNT
            } else {
                SUGGESTION_DEFAULT_MEASURED
            });
            service.add_ingredient(NewIngredient::from_display(name, category, amount, format))?
        }
    };

    let verb = if matches!(outcome, AddOutcome::Merged { .. }) {
        "Updated"
    } else {
        "Added"
    };
    match outcome {
        AddOutcome::Merged { id, .. } | AddOutcome::Created { id } => {
            if let Some(entry) = service.inventory().get(&id) {
                println!(
                    "{verb} {} {}: {}",
                    entry.emoji,
                    entry.name,
                    entry.display_quantity()
                );
            }
            info!(id = %id, "Fridge add applied");
            Ok(())
        }
        AddOutcome::UnitMismatchRejected {
            existing_id,
            existing_format,
            candidate_format,
        } => Err(AppError::unit_mismatch(format!(
            "'{name}' is stored in {existing_format}, cannot add {candidate_format}"
        ))
        .with_resource_id(existing_id.as_str())),
    }
}

/// Print suggestion templates matching `query` that are not stocked
pub fn suggest(service: &InventoryService, query: &str) {
    let found = service.filter_suggestions(query);
    if found.is_empty() {
        println!("No suggestion for '{query}'");
        return;
    }
    for suggestion in found {
        println!(
            "{} {} ({})",
            suggestion.emoji, suggestion.name, suggestion.category
        );
    }
}

/// Move an ingredient one step up or down
pub fn step(service: &mut InventoryService, target: &str, up: bool) -> Result<()> {
    let id = resolve(service, target)?;
    let update = if up {
        service.increment(&id)
    } else {
        service.decrement(&id)
    };
    report(service, &id, &update);
    Ok(())
}

/// Shift an ingredient by `delta` base units
pub fn adjust(service: &mut InventoryService, target: &str, delta: f64) -> Result<()> {
    let id = resolve(service, target)?;
    let update = service.update_quantity(&id, delta);
    report(service, &id, &update);
    Ok(())
}

/// Remove an ingredient
pub fn remove(service: &mut InventoryService, target: &str) -> Result<()> {
    let id = resolve(service, target)?;
    if let Some(entry) = service.remove_ingredient(&id) {
        println!("Removed {} {}", entry.emoji, entry.name);
    }
    Ok(())
}

/// Remove every ingredient
pub fn clear(service: &mut InventoryService) {
    let count = service.inventory().len();
    service.clear();
    println!("Removed {count} ingredient(s)");
}

/// Warn when writes failed during this run
pub fn report_persist_failures(service: &InventoryService) {
    let failures = service.persist_failures();
    if failures > 0 {
        warn!(failures, "Some changes were not saved");
        eprintln!("Warning: {failures} change(s) could not be saved");
    }
}

fn report(service: &InventoryService, id: &IngredientId, update: &QuantityUpdate) {
    display_update(service.inventory().get(id), update);
}

/// Match `target` against ids first, then names
fn resolve(service: &InventoryService, target: &str) -> Result<IngredientId> {
    let inventory = service.inventory();
    let by_id = IngredientId::from(target);
    if inventory.get(&by_id).is_some() {
        return Ok(by_id);
    }
    inventory
        .find_by_name(target)
        .map(|entry| entry.id.clone())
        .ok_or_else(|| {
            AppError::not_found(format!("Ingredient '{target}'")).with_resource_id(target)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ymeal::errors::ErrorCode;
    use ymeal::storage::MemoryStore;

    fn service() -> InventoryService {
        InventoryService::load(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_add_creates_then_merges() {
        let mut service = service();
        add(&mut service, "Lait", Some(20.0), Some("cl".into()), None).unwrap();
        add(&mut service, "lait", Some(300.0), Some("ml".into()), None).unwrap();

        assert_eq!(service.inventory().len(), 1);
        assert_eq!(
            service.inventory().entries()[0].display_quantity(),
            "50 cl"
        );
    }

    #[test]
    fn test_add_reports_unit_mismatch() {
        let mut service = service();
        add(&mut service, "Oeufs", Some(6.0), Some("x".into()), None).unwrap();

        let err = add(&mut service, "oeufs", Some(100.0), Some("g".into()), None).unwrap_err();

        assert_eq!(err.code, ErrorCode::UnitMismatch);
        assert_eq!(service.inventory().len(), 1);
    }

    #[test]
    fn test_adjust_by_infinity_keeps_entry() {
        let mut service = service();
        add(&mut service, "Lait", Some(500.0), Some("ml".into()), None).unwrap();

        adjust(&mut service, "Lait", f64::INFINITY).unwrap();

        assert_eq!(
            service.inventory().entries()[0].display_quantity(),
            "500 ml"
        );
    }
}

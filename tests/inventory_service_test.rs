// ABOUTME: Integration tests for the inventory service and key-value store backends
// ABOUTME: Validates persistence after mutations, reload, malformed data recovery and write failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;
use tempfile::TempDir;
use ymeal::constants::storage_keys;
use ymeal::errors::{AppError, AppResult, ErrorCode};
use ymeal::inventory::{
    AddOutcome, Category, IngredientId, InventoryService, NewIngredient, QuantityFormat,
    QuantityUpdate,
};
use ymeal::storage::{
    create_store, FileStore, KeyValueStore, MemoryStore, StorageBackend,
};

/// Store that can be switched into failing every write
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
    failing: AtomicBool,
}

impl FlakyStore {
    fn fail_writes(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::storage("disk full"));
        }
        self.inner.set(key, value)
    }
}

fn milk(amount: f64) -> NewIngredient {
    NewIngredient::from_display("Lait", Category::Liquids, amount, QuantityFormat::Milliliters)
}

#[test]
fn test_missing_key_loads_empty() {
    let service = InventoryService::load(Arc::new(MemoryStore::new()));
    assert!(service.inventory().is_empty());
    assert_eq!(service.key(), storage_keys::INVENTORY);
}

#[test]
fn test_every_mutation_rewrites_full_collection() {
    let store = Arc::new(MemoryStore::new());
    let mut service = InventoryService::load(store.clone());

    service.add_ingredient(milk(200.0)).unwrap();
    service
        .add_ingredient(NewIngredient::from_display(
            "Riz",
            Category::Starches,
            1.5,
            QuantityFormat::Kilograms,
        ))
        .unwrap();

    let raw = store.get(storage_keys::INVENTORY).unwrap().unwrap();
    let records: Value = serde_json::from_str(&raw).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], "Lait");
    assert_eq!(records[0]["category"], "Liquides");
    assert_eq!(records[0]["format"], "Millilitres");
    assert_eq!(records[1]["format"], "Kilogrammes");
    assert_eq!(records[1]["quantity"], 1500.0);
    assert!(records[0]["id"].is_string());
}

#[test]
fn test_reload_from_memory_store() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let mut service = InventoryService::load(Arc::clone(&store));
    service.add_ingredient(milk(200.0)).unwrap();
    service.add_ingredient(milk(300.0)).unwrap();
    let original = service.inventory().clone();

    let reloaded = InventoryService::load(store);
    assert_eq!(reloaded.inventory(), &original);
    assert_eq!(reloaded.inventory().entries()[0].display_quantity(), "500 ml");
}

#[test]
fn test_reload_from_file_store() {
    let dir = TempDir::new().unwrap();
    let id = {
        let store = create_store(&StorageBackend::File(dir.path().to_path_buf())).unwrap();
        let mut service = InventoryService::load(store);
        match service.add_ingredient(milk(250.0)).unwrap() {
            AddOutcome::Created { id } => id,
            other => panic!("unexpected outcome {other:?}"),
        }
    };

    let store = Arc::new(FileStore::open(dir.path()).unwrap());
    let mut service = InventoryService::load(store);
    assert_eq!(service.inventory().get(&id).unwrap().display_quantity(), "250 ml");

    assert!(matches!(service.increment(&id), QuantityUpdate::Adjusted { .. }));
    let store = Arc::new(FileStore::open(dir.path()).unwrap());
    let service = InventoryService::load(store);
    assert_eq!(service.inventory().get(&id).unwrap().display_quantity(), "350 ml");
}

#[test]
fn test_malformed_document_loads_empty() {
    let store = Arc::new(MemoryStore::new());
    store.set(storage_keys::INVENTORY, "{not json").unwrap();
    assert!(InventoryService::load(store.clone()).inventory().is_empty());

    store
        .set(storage_keys::INVENTORY, r#"{"name":"Lait"}"#)
        .unwrap();
    assert!(InventoryService::load(store).inventory().is_empty());
}

#[test]
fn test_load_repairs_stored_records() {
    let store = Arc::new(MemoryStore::new());
    let raw = r#"[
        {"id":"a","name":"Lait","category":"Liquides","emoji":"🥛","quantity":200,"format":"Millilitres"},
        {"id":"b","name":"LAIT","category":"Liquides","emoji":"🥛","quantity":100,"format":"Centilitres"},
        {"id":"c","name":"Sucre","category":"Produits sucrés ","emoji":"🍬","quantity":0,"format":"Grammes"},
        {"id":"d","name":"Sel","category":"Épices","emoji":"🧂","quantity":50,"format":"Grammes"}
    ]"#;
    store.set(storage_keys::INVENTORY, raw).unwrap();

    let service = InventoryService::load(store);
    let inventory = service.inventory();

    assert_eq!(inventory.len(), 2);
    let milk = inventory.get(&IngredientId::from("a")).unwrap();
    assert!((milk.quantity - 300.0).abs() < f64::EPSILON);
    let salt = inventory.get(&IngredientId::from("d")).unwrap();
    assert_eq!(salt.category, Category::Other);
}

#[test]
fn test_persist_failure_keeps_memory_state() {
    let store = Arc::new(FlakyStore::default());
    let mut service = InventoryService::load(store.clone());
    service.add_ingredient(milk(200.0)).unwrap();

    store.fail_writes(true);
    service.add_ingredient(milk(300.0)).unwrap();
    assert_eq!(service.persist_failures(), 1);
    assert_eq!(service.inventory().entries()[0].display_quantity(), "500 ml");

    let stale = InventoryService::load(store.clone());
    assert_eq!(stale.inventory().entries()[0].display_quantity(), "200 ml");

    store.fail_writes(false);
    let id = service.inventory().entries()[0].id.clone();
    service.increment(&id);
    assert_eq!(service.persist_failures(), 1);
    let fresh = InventoryService::load(store);
    assert_eq!(fresh.inventory().entries()[0].display_quantity(), "600 ml");
}

fn seeded_service(store: &Arc<MemoryStore>) -> (InventoryService, IngredientId) {
    let mut service = InventoryService::load(store.clone());
    service.add_ingredient(milk(500.0)).unwrap();
    service
        .add_ingredient(NewIngredient::from_display(
            "Riz",
            Category::Starches,
            1.0,
            QuantityFormat::Kilograms,
        ))
        .unwrap();
    let milk_id = service.inventory().entries()[0].id.clone();
    (service, milk_id)
}

#[test]
fn test_non_finite_adjustment_survives_reload() {
    let store = Arc::new(MemoryStore::new());
    let (mut service, milk_id) = seeded_service(&store);
    let written = store.get(storage_keys::INVENTORY).unwrap();

    for delta in [f64::INFINITY, f64::NAN] {
        let update = service.update_quantity(&milk_id, delta);
        assert_eq!(update, QuantityUpdate::Rejected { quantity: 500.0 });
    }
    assert_eq!(store.get(storage_keys::INVENTORY).unwrap(), written);

    let reloaded = InventoryService::load(store);
    assert_eq!(reloaded.inventory().len(), 2);
    assert_eq!(
        reloaded.inventory().get(&milk_id).unwrap().display_quantity(),
        "500 ml"
    );
}

#[test]
fn test_overflowing_merge_survives_reload() {
    let store = Arc::new(MemoryStore::new());
    let (mut service, _) = seeded_service(&store);
    let huge = || {
        NewIngredient::from_display("Riz", Category::Starches, 1e308, QuantityFormat::Grams)
    };

    service.add_ingredient(huge()).unwrap();
    let err = service.add_ingredient(huge()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let reloaded = InventoryService::load(store);
    assert_eq!(reloaded.inventory().len(), 2);
    assert!(reloaded
        .inventory()
        .entries()
        .iter()
        .all(|entry| entry.quantity.is_finite()));
}

#[test]
fn test_no_op_mutations_do_not_write() {
    let store = Arc::new(MemoryStore::new());
    let mut service = InventoryService::load(store.clone());

    service.update_quantity(&IngredientId::from("ghost"), 10.0);
    service.remove_ingredient(&IngredientId::from("ghost"));
    assert!(store.is_empty());

    service
        .add_ingredient(NewIngredient::from_display(
            "Oeufs",
            Category::Dairy,
            6.0,
            QuantityFormat::Count,
        ))
        .unwrap();
    let written = store.get(storage_keys::INVENTORY).unwrap();
    let outcome = service
        .add_ingredient(NewIngredient::from_display(
            "oeufs",
            Category::Dairy,
            100.0,
            QuantityFormat::Grams,
        ))
        .unwrap();
    assert!(!outcome.is_applied());
    assert_eq!(store.get(storage_keys::INVENTORY).unwrap(), written);
}

#[test]
fn test_custom_key_and_display_rows() {
    let store = Arc::new(MemoryStore::new());
    let mut service = InventoryService::load_from(store.clone(), "fridge-test");
    service.add_ingredient(milk(150.0)).unwrap();

    assert!(store.get(storage_keys::INVENTORY).unwrap().is_none());
    assert!(store.get("fridge-test").unwrap().is_some());

    let rows = service.display_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].quantity, "150 ml");
    assert!((rows[0].step - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_clear_persists_empty_array() {
    let store = Arc::new(MemoryStore::new());
    let mut service = InventoryService::load(store.clone());
    service.add_ingredient(milk(100.0)).unwrap();
    service.clear();
    assert_eq!(store.get(storage_keys::INVENTORY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_file_store_rejects_path_like_keys() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let err = store.set("../escape", "{}").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(store.get("absent").unwrap(), None);
}

//! A broken source never prevents the others in the same pass.

mod common;

use common::{DataRoot, bucket_items, coordinator, id};
use loot_core::{Category, Entry, FeatureToggles, ItemCatalog, LootError, ResourceId};
use loot_runtime::{FailureSource, LootSinks, LootSupplier, StaticSupplier, SupplierRegistry};

struct ExplodingSupplier;

impl LootSupplier for ExplodingSupplier {
    fn target_id(&self) -> ResourceId {
        id("mymod:chests/exploding")
    }

    fn category(&self) -> Category {
        Category::Chest
    }

    fn entries(&self, _: &dyn ItemCatalog) -> Result<Vec<Entry>, LootError> {
        panic!("third-party supplier bug")
    }
}

/// Unknown items, malformed files, broken JSON and panicking suppliers are all
/// skipped while every valid source is still merged.
#[test]
fn unresolvable_sources_are_isolated() {
    let root = DataRoot::new();
    root.write(
        "mymod/emi_loot_suppliers/chests/good.json",
        r#"{"loot_table_id": "mymod:chests/good", "entries": [{"item": "diamond"}]}"#,
    )
    .write(
        "mymod/emi_loot_suppliers/chests/ghost.json",
        r#"{"loot_table_id": "mymod:chests/ghost", "entries": [{"item": "diamond"}, {"item": "mymod:ghost"}]}"#,
    )
    .write("mymod/emi_loot_suppliers/chests/broken.json", "{ not json")
    .write(
        "mymod/emi_loot_suppliers/blocks/weight.json",
        r#"{"loot_table_id": "minecraft:blocks/stone", "entries": [{"item": "bone", "weight": 0}]}"#,
    );

    let mut registry = SupplierRegistry::new();
    registry
        .register(id("mymod:exploding"), || ExplodingSupplier)
        .expect("unique name");
    registry
        .register(id("mymod:unknown_item"), || {
            StaticSupplier::new(id("mymod:chests/code_ghost"), Category::Chest)
                .with_item(id("mymod:ghost"), 1)
        })
        .expect("unique name");
    registry
        .register(id("mymod:good_code"), || {
            StaticSupplier::new(id("mymod:chests/good"), Category::Chest)
                .with_item(id("emerald"), 4)
        })
        .expect("unique name");
    let mut coordinator = coordinator(registry, FeatureToggles::default());

    let discovered = root.discover();
    assert_eq!(discovered.len(), 3, "broken JSON is dropped by discovery");

    let mut sinks = LootSinks::new();
    let report = coordinator.run_pass(&discovered, &mut sinks);

    assert_eq!(report.processed, 2);
    assert_eq!(report.files.rejected, 2);

    let code_failures: Vec<&str> = report
        .failures
        .iter()
        .filter(|f| f.source == FailureSource::Code)
        .map(|f| f.kind)
        .collect();
    assert_eq!(code_failures, vec!["panic", "invalid_entry"]);

    assert_eq!(
        bucket_items(&sinks, Category::Chest, "mymod:chests/good"),
        vec!["minecraft:emerald", "minecraft:diamond"]
    );
    assert!(sinks.bucket(Category::Chest, &id("mymod:chests/ghost")).is_none());
    assert!(sinks.bucket(Category::Block, &id("minecraft:blocks/stone")).is_none());
}

#[test]
fn duplicate_supplier_names_are_rejected() {
    let mut registry = SupplierRegistry::new();
    let make = || {
        StaticSupplier::new(id("mymod:chests/a"), Category::Chest).with_item(id("diamond"), 1)
    };
    registry.register(id("mymod:a"), make).expect("first registration");

    let err = registry
        .register(id("mymod:a"), make)
        .expect_err("second registration must fail");
    assert!(matches!(err, LootError::DuplicateSupplier { .. }));
}

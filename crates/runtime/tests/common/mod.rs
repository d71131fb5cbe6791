#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::Arc;

use loot_content::{DiscoveredFile, SupplierDiscovery};
use loot_core::{Category, FeatureToggles, ResourceId, StaticItemCatalog};
use loot_runtime::{ReloadContext, ReloadCoordinator, SupplierRegistry};
use tempfile::TempDir;

pub fn id(raw: &str) -> ResourceId {
    ResourceId::parse(raw).expect("test ids are valid")
}

pub fn catalog() -> StaticItemCatalog {
    ["diamond", "emerald", "bone", "gold_ingot", "mymod:ruby"]
        .into_iter()
        .map(id)
        .collect()
}

pub fn coordinator(registry: SupplierRegistry, toggles: FeatureToggles) -> ReloadCoordinator {
    ReloadCoordinator::new(ReloadContext::new(registry, Arc::new(catalog()), toggles))
}

/// Data root populated with supplier files.
pub struct DataRoot {
    dir: TempDir,
}

impl DataRoot {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Writes `content` to `<root>/<relative>`.
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().expect("relative path has a parent"))
            .expect("create parent dirs");
        fs::write(path, content).expect("write supplier file");
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn discover(&self) -> Vec<DiscoveredFile> {
        SupplierDiscovery::new(self.path())
            .discover()
            .expect("discovery succeeds")
    }
}

/// Item ids of every entry in the bucket, in pool order.
pub fn bucket_items(
    sinks: &loot_runtime::LootSinks,
    category: Category,
    target: &str,
) -> Vec<String> {
    sinks
        .bucket(category, &id(target))
        .map(|bucket| bucket.entries().map(|e| e.item().to_string()).collect())
        .unwrap_or_default()
}

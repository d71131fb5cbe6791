//! Content factory for locating supplier data.

use std::path::{Path, PathBuf};

use loot_core::StaticItemCatalog;

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, LootConfig, SupplierDiscovery};

/// Content factory that loads all supplier content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── loot.toml
/// ├── items.json
/// └── data/
///     └── mymod/
///         └── emi_loot_suppliers/
///             ├── chests/
///             ├── blocks/
///             ├── entities/
///             ├── gameplay/
///             └── archaeology/
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load toggles from `loot.toml`, falling back to defaults when absent.
    pub fn load_config(&self) -> LoadResult<LootConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join("loot.toml"))
    }

    /// Load the item catalog from `items.json`.
    pub fn load_item_catalog(&self) -> LoadResult<StaticItemCatalog> {
        ItemLoader::load(&self.data_dir.join("items.json"))
    }

    /// Discovery rooted at `data/`.
    pub fn discovery(&self) -> SupplierDiscovery {
        SupplierDiscovery::new(self.data_dir.join("data"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

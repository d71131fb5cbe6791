//! Item catalog loader.

use std::path::Path;

use loot_core::{ResourceId, StaticItemCatalog};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for JSON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemList {
    pub items: Vec<ResourceId>,
}

/// Loader for the known-item catalog from JSON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load an item catalog from a JSON file of the form
    /// `{"items": ["minecraft:diamond", ...]}`.
    pub fn load(path: &Path) -> LoadResult<StaticItemCatalog> {
        let content = read_file(path)?;
        let list: ItemList = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog JSON: {}", e))?;

        Ok(list.items.into_iter().collect())
    }
}

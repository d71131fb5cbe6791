//! Reload-scoped context threaded through every pass.

use std::sync::Arc;

use loot_core::{FeatureToggles, ItemCatalog};

use crate::providers::SupplierRegistry;

/// Everything a pass reads besides the discovered files.
pub struct ReloadContext {
    registry: SupplierRegistry,
    catalog: Arc<dyn ItemCatalog>,
    toggles: FeatureToggles,
}

impl ReloadContext {
    pub fn new(
        registry: SupplierRegistry,
        catalog: Arc<dyn ItemCatalog>,
        toggles: FeatureToggles,
    ) -> Self {
        Self {
            registry,
            catalog,
            toggles,
        }
    }

    pub fn registry(&self) -> &SupplierRegistry {
        &self.registry
    }

    /// Suppliers registered here take part from the next pass on.
    pub fn registry_mut(&mut self) -> &mut SupplierRegistry {
        &mut self.registry
    }

    pub fn catalog(&self) -> &dyn ItemCatalog {
        self.catalog.as_ref()
    }

    pub fn set_catalog(&mut self, catalog: Arc<dyn ItemCatalog>) {
        self.catalog = catalog;
    }

    pub fn toggles(&self) -> &FeatureToggles {
        &self.toggles
    }

    pub fn set_toggles(&mut self, toggles: FeatureToggles) {
        self.toggles = toggles;
    }
}

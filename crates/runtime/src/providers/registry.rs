//! Registry of code-provided suppliers.
//!
//! Suppliers are registered under a unique name together with a factory. The
//! registry only stores factories; suppliers themselves are created during
//! each aggregation pass.

use std::collections::HashSet;
use std::sync::Arc;

use loot_core::{LootError, ResourceId};

use super::{LootSupplier, ProviderSource, SupplierFactory};

/// Ordered set of named supplier factories.
///
/// # Architecture
///
/// ```text
/// SupplierRegistry
/// ├── suppliers: Vec<(ResourceId, SupplierFactory)>  (registration order)
/// └── names: HashSet<ResourceId>  (uniqueness check)
/// ```
#[derive(Default)]
pub struct SupplierRegistry {
    suppliers: Vec<(ResourceId, SupplierFactory)>,
    names: HashSet<ResourceId>,
}

impl SupplierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a supplier factory under `name`.
    ///
    /// # Errors
    ///
    /// Returns `LootError::DuplicateSupplier` if `name` is already taken.
    pub fn register<F, S>(&mut self, name: ResourceId, factory: F) -> Result<(), LootError>
    where
        F: Fn() -> S + Send + Sync + 'static,
        S: LootSupplier + 'static,
    {
        self.register_boxed(
            name,
            Arc::new(move || Box::new(factory()) as Box<dyn LootSupplier>),
        )
    }

    /// Register an already type-erased factory.
    pub fn register_boxed(
        &mut self,
        name: ResourceId,
        factory: SupplierFactory,
    ) -> Result<(), LootError> {
        if !self.names.insert(name.clone()) {
            return Err(LootError::DuplicateSupplier { name });
        }
        self.suppliers.push((name, factory));
        Ok(())
    }

    /// Remove a supplier. Returns its factory if it was registered.
    pub fn unregister(&mut self, name: &ResourceId) -> Option<SupplierFactory> {
        if !self.names.remove(name) {
            return None;
        }
        let index = self.suppliers.iter().position(|(n, _)| n == name)?;
        Some(self.suppliers.remove(index).1)
    }

    pub fn contains(&self, name: &ResourceId) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &ResourceId> + '_ {
        self.suppliers.iter().map(|(name, _)| name)
    }

    /// Sources for the aggregator, in registration order.
    pub fn sources(&self) -> impl Iterator<Item = ProviderSource<'_>> + '_ {
        self.suppliers
            .iter()
            .map(|(name, factory)| ProviderSource::Code { name, factory })
    }
}

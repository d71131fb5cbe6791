//! Code-provided suppliers.
//!
//! A supplier is produced fresh by its factory on every aggregation pass, so
//! its output may change between passes.

pub mod registry;
pub mod static_supplier;

pub use registry::SupplierRegistry;
pub use static_supplier::StaticSupplier;

use std::borrow::Cow;
use std::sync::Arc;

use loot_core::{Category, Definition, Entry, ItemCatalog, LootError, ResourceId};

/// A programmatic source of loot entries for one loot table.
pub trait LootSupplier: Send {
    /// Loot table this supplier contributes to. May name an existing table to
    /// extend it.
    fn target_id(&self) -> ResourceId;

    /// Context category selecting the bucket map.
    fn category(&self) -> Category;

    /// Entries to contribute, resolved against `catalog`.
    ///
    /// # Errors
    ///
    /// Implementations typically surface [`LootError::InvalidEntry`] when an
    /// item does not resolve.
    fn entries(&self, catalog: &dyn ItemCatalog) -> Result<Vec<Entry>, LootError>;

    /// Entity owning the loot table. Only consulted for entity loot.
    fn subject_id(&self) -> Option<ResourceId> {
        None
    }
}

/// Zero-argument constructor for a supplier, invoked once per pass.
pub type SupplierFactory = Arc<dyn Fn() -> Box<dyn LootSupplier> + Send + Sync>;

/// One contribution considered by the aggregator.
#[derive(Clone)]
pub enum ProviderSource<'a> {
    Code {
        name: &'a ResourceId,
        factory: &'a SupplierFactory,
    },
    File(&'a Definition),
}

impl<'a> ProviderSource<'a> {
    /// Short label identifying the source in logs and reports.
    pub fn origin(&self) -> String {
        match self {
            ProviderSource::Code { name, .. } => name.to_string(),
            ProviderSource::File(definition) => definition.target_id().to_string(),
        }
    }

    /// Produces the definition to route.
    ///
    /// Code suppliers are created and queried here; file definitions were
    /// already validated when parsed and are borrowed as-is.
    pub fn resolve(&self, catalog: &dyn ItemCatalog) -> Result<Cow<'a, Definition>, LootError> {
        match self {
            ProviderSource::Code { factory, .. } => {
                let supplier = factory();
                let entries = supplier.entries(catalog)?;
                Definition::new(
                    supplier.target_id(),
                    supplier.category(),
                    entries,
                    supplier.subject_id(),
                )
                .map(Cow::Owned)
            }
            ProviderSource::File(definition) => Ok(Cow::Borrowed(*definition)),
        }
    }
}

impl std::fmt::Debug for ProviderSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderSource::Code { name, .. } => {
                f.debug_struct("Code").field("name", name).finish()
            }
            ProviderSource::File(definition) => f
                .debug_tuple("File")
                .field(&definition.target_id().to_string())
                .finish(),
        }
    }
}

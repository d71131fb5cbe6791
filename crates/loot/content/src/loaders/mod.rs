//! Content loaders for reading supplier data from files.
//!
//! Loaders do the I/O; parsing of individual definitions is left to
//! [`crate::parser`].

pub mod config;
pub mod discovery;
pub mod factory;
pub mod item;

pub use config::{ConfigLoader, LootConfig};
pub use discovery::{DiscoveredFile, SUPPLIER_FOLDER, SupplierDiscovery};
pub use factory::ContentFactory;
pub use item::ItemLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

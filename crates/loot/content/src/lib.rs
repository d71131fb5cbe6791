//! Data-driven supplier definitions and loaders.
//!
//! This crate turns authored data into validated loot-core values:
//! - Supplier definitions (JSON, parsed against an item catalog)
//! - Entry conditions (decoded into display tokens)
//! - Supplier file discovery under `emi_loot_suppliers/`
//! - Feature toggles (TOML)
//! - Item catalogs (JSON)
//!
//! Parsing never touches the filesystem; the loaders do the I/O and hand raw
//! JSON to the parser.

pub mod parser;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use parser::{ConditionDecoder, ConditionKind, DefinitionParser, infer_category};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, DiscoveredFile, ItemLoader, LootConfig, SupplierDiscovery,
};

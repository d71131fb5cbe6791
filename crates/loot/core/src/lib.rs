//! Shared loot supplier types.
//!
//! `loot-core` defines the normalized model every supplier source is reduced
//! to before routing: identifiers, categories, entries, definitions, display
//! tokens and the error taxonomy. Parsing lives in `loot-content`; routing and
//! reload orchestration live in `loot-runtime`.
pub mod category;
pub mod definition;
pub mod entry;
pub mod error;
pub mod id;
pub mod text;

pub use category::{Category, FeatureToggles, PoolShape};
pub use definition::Definition;
pub use entry::{Entry, ItemCatalog, StaticItemCatalog};
pub use error::{ConditionError, EntryError, LootError, MalformedReason, Result};
pub use id::{InvalidResourceId, ResourceId};
pub use text::{ConditionToken, FunctionToken, Text, keys};

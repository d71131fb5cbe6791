//! Runtime orchestration for supplier aggregation.
//!
//! This crate wires code-provided suppliers and file-authored definitions into
//! per-category bucket sinks. Hosts embed [`ReloadCoordinator`] and call
//! [`ReloadCoordinator::run_pass`] whenever their data reloads.
//!
//! Modules are organized by responsibility:
//! - [`providers`] holds the code-provider abstraction and its registry
//! - [`sink`] provides the bucket maps contributions are merged into
//! - [`routing`] selects and merges into the bucket for each definition
//! - [`aggregator`] drives one isolated pass over every source
//! - [`reload`] owns the reload-scoped context and file-definition collection
pub mod aggregator;
pub mod providers;
pub mod reload;
pub mod routing;
pub mod sink;

pub use aggregator::{AggregationReport, Failure, FailureSource, FileStats, aggregate};
pub use providers::{
    LootSupplier, ProviderSource, StaticSupplier, SupplierFactory, SupplierRegistry,
};
pub use reload::{ReloadContext, ReloadCoordinator, ReloadState};
pub use routing::{RouteOutcome, route};
pub use sink::{BASE_MULTIPLIER, Bucket, BucketMap, LootPool, LootSinks};

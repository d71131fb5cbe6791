//! Reload coordination.
//!
//! The host calls [`ReloadCoordinator::run_pass`] once its background file
//! discovery completes. A pass parses the discovered files, swaps in the new
//! file-definition collection and aggregates every source into the sinks.
//!
//! Passes must be serialized by the host; `run_pass` borrows the coordinator
//! mutably, so two passes can never overlap on the same coordinator.

mod context;

pub use context::ReloadContext;

use std::sync::Arc;

use loot_content::{DefinitionParser, DiscoveredFile};
use loot_core::Definition;
use tracing::{debug, error, info};

use crate::aggregator::{AggregationReport, FailureSource, aggregate, error_chain};
use crate::sink::LootSinks;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReloadState {
    Idle,
    Reloading,
}

/// Owns the reload context and the file-derived definitions of the last pass.
pub struct ReloadCoordinator {
    context: ReloadContext,
    state: ReloadState,
    file_definitions: Arc<[Definition]>,
    passes: u64,
}

impl ReloadCoordinator {
    pub fn new(context: ReloadContext) -> Self {
        Self {
            context,
            state: ReloadState::Idle,
            file_definitions: Arc::from(Vec::new()),
            passes: 0,
        }
    }

    pub fn state(&self) -> ReloadState {
        self.state
    }

    pub fn context(&self) -> &ReloadContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut ReloadContext {
        &mut self.context
    }

    /// Handle to the current file definitions.
    ///
    /// The handle stays valid after later passes; it keeps showing the
    /// collection it was taken from.
    pub fn file_definitions(&self) -> Arc<[Definition]> {
        Arc::clone(&self.file_definitions)
    }

    /// Number of completed passes.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Runs one reload pass into `sinks`.
    ///
    /// Definitions from the previous pass are replaced, never appended to, so
    /// repeating a pass over the same input with freshly seeded sinks produces
    /// identical buckets.
    pub fn run_pass(
        &mut self,
        discovered: &[DiscoveredFile],
        sinks: &mut LootSinks,
    ) -> AggregationReport {
        self.state = ReloadState::Reloading;
        debug!(
            target: "loot::reload",
            pass = self.passes + 1,
            files = discovered.len(),
            "Starting reload pass"
        );

        let mut report = AggregationReport::default();
        let parsed = self.parse_files(discovered, &mut report);

        // Swap the whole collection at once; readers of the old handle keep it.
        self.file_definitions = Arc::from(parsed);

        let aggregated = aggregate(
            self.context.registry(),
            &self.file_definitions,
            self.context.catalog(),
            self.context.toggles(),
            sinks,
        );
        report.processed = aggregated.processed;
        report.skipped_disabled = aggregated.skipped_disabled;
        report.failures.extend(aggregated.failures);

        self.passes += 1;
        self.state = ReloadState::Idle;
        info!(
            target: "loot::reload",
            pass = self.passes,
            discovered = report.files.discovered,
            parsed = report.files.parsed,
            rejected = report.files.rejected,
            processed = report.processed,
            failed = report.failures.len(),
            "Reload pass complete"
        );
        report
    }

    fn parse_files(
        &self,
        discovered: &[DiscoveredFile],
        report: &mut AggregationReport,
    ) -> Vec<Definition> {
        let parser = DefinitionParser::new(self.context.catalog());
        let mut parsed = Vec::with_capacity(discovered.len());
        report.files.discovered = discovered.len();

        for file in discovered {
            match parser.parse(&file.json, file.category_hint()) {
                Ok(definition) => parsed.push(definition),
                Err(err) => {
                    error!(
                        target: "loot::reload",
                        location = %file.location,
                        kind = err.kind(),
                        error = %error_chain(&err),
                        "Rejected supplier file"
                    );
                    report.record(FailureSource::File, file.location.clone(), None, &err);
                }
            }
        }

        report.files.parsed = parsed.len();
        report.files.rejected = discovered.len() - parsed.len();
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loot_core::{FeatureToggles, ResourceId, StaticItemCatalog};
    use serde_json::json;
    use std::path::PathBuf;

    use crate::providers::SupplierRegistry;

    fn coordinator() -> ReloadCoordinator {
        let catalog: StaticItemCatalog = [ResourceId::parse("diamond").unwrap()]
            .into_iter()
            .collect();
        ReloadCoordinator::new(ReloadContext::new(
            SupplierRegistry::new(),
            Arc::new(catalog),
            FeatureToggles::default(),
        ))
    }

    fn file(location: &str, json: serde_json::Value) -> DiscoveredFile {
        DiscoveredFile {
            location: location.to_string(),
            path: PathBuf::from(location),
            json,
        }
    }

    #[test]
    fn old_handle_survives_swap() {
        let mut coordinator = coordinator();
        let files = vec![file(
            "mymod:emi_loot_suppliers/chests/a.json",
            json!({"loot_table_id": "mymod:chests/a", "entries": [{"item": "diamond"}]}),
        )];

        coordinator.run_pass(&files, &mut LootSinks::new());
        let first = coordinator.file_definitions();
        assert_eq!(first.len(), 1);

        let report = coordinator.run_pass(&[], &mut LootSinks::new());
        assert_eq!(report.files.discovered, 0);
        assert_eq!(first.len(), 1);
        assert!(coordinator.file_definitions().is_empty());
        assert_eq!(coordinator.passes(), 2);
        assert_eq!(coordinator.state(), ReloadState::Idle);
    }

    #[test]
    fn rejected_files_are_reported() {
        let mut coordinator = coordinator();
        let files = vec![
            file(
                "mymod:emi_loot_suppliers/chests/empty.json",
                json!({"loot_table_id": "mymod:chests/empty", "entries": []}),
            ),
            file(
                "mymod:emi_loot_suppliers/misc/nowhere.json",
                json!({"loot_table_id": "mymod:x", "entries": [{"item": "diamond"}]}),
            ),
        ];

        let report = coordinator.run_pass(&files, &mut LootSinks::new());
        assert_eq!(report.files.parsed, 0);
        assert_eq!(report.files.rejected, 2);
        assert_eq!(report.failures[0].kind, "malformed_definition");
        assert_eq!(report.failures[1].kind, "unresolvable_category");
        assert_eq!(report.failures[1].origin, "mymod:emi_loot_suppliers/misc/nowhere.json");
    }
}

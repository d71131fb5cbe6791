//! Provider aggregation.
//!
//! One pass walks every code supplier and then every file definition, routing
//! each into the sinks. Every source is isolated: an error or panic while
//! resolving or routing one source is recorded and the pass moves on.

use std::error::Error;
use std::panic::{self, AssertUnwindSafe};

use loot_core::{Definition, FeatureToggles, ItemCatalog, LootError, ResourceId};
use tracing::{debug, error, info};

use crate::providers::{ProviderSource, SupplierRegistry};
use crate::routing::{RouteOutcome, route};
use crate::sink::LootSinks;

/// Which kind of source a failure came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailureSource {
    Code,
    File,
}

/// A source that contributed nothing because of an error.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Failure {
    pub source: FailureSource,
    /// Supplier name, file location, or loot table id.
    pub origin: String,
    pub target: Option<ResourceId>,
    /// Stable error label, see [`LootError::kind`]. `"panic"` for panics.
    pub kind: &'static str,
    pub message: String,
}

/// Per-pass file statistics filled in by the reload coordinator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FileStats {
    pub discovered: usize,
    pub parsed: usize,
    pub rejected: usize,
}

/// Outcome of one aggregation pass.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AggregationReport {
    /// Sources merged into a bucket.
    pub processed: usize,
    /// Sources whose category was disabled.
    pub skipped_disabled: usize,
    pub files: FileStats,
    pub failures: Vec<Failure>,
}

impl AggregationReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn record(
        &mut self,
        source: FailureSource,
        origin: String,
        target: Option<ResourceId>,
        err: &LootError,
    ) {
        self.failures.push(Failure {
            source,
            origin,
            target,
            kind: err.kind(),
            message: error_chain(err),
        });
    }
}

/// Runs one pass over `registry` and `files`, merging into `sinks`.
///
/// Code suppliers are visited in registration order, then file definitions in
/// slice order. Each code factory is invoked exactly once.
pub fn aggregate(
    registry: &SupplierRegistry,
    files: &[Definition],
    catalog: &dyn ItemCatalog,
    toggles: &FeatureToggles,
    sinks: &mut LootSinks,
) -> AggregationReport {
    let mut report = AggregationReport::default();

    let sources = registry
        .sources()
        .chain(files.iter().map(ProviderSource::File));
    for source in sources {
        process(&source, catalog, toggles, sinks, &mut report);
    }

    if report.processed > 0 {
        info!(
            target: "loot::aggregator",
            processed = report.processed,
            skipped_disabled = report.skipped_disabled,
            failed = report.failures.len(),
            "Processed loot suppliers"
        );
    }
    report
}

fn process(
    source: &ProviderSource<'_>,
    catalog: &dyn ItemCatalog,
    toggles: &FeatureToggles,
    sinks: &mut LootSinks,
    report: &mut AggregationReport,
) {
    let source_kind = match source {
        ProviderSource::Code { .. } => FailureSource::Code,
        ProviderSource::File(_) => FailureSource::File,
    };
    let origin = source.origin();

    // A panicking supplier is recorded like any other failure.
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| -> Result<_, RoutedError> {
        let definition = source.resolve(catalog)?;
        let target = definition.target_id().clone();
        match route(&definition, sinks, toggles) {
            Ok(outcome) => Ok((target, outcome)),
            Err(err) => Err(RoutedError {
                target: Some(target),
                err,
            }),
        }
    }));

    match outcome {
        Ok(Ok((target, RouteOutcome::Merged { entries }))) => {
            report.processed += 1;
            debug!(
                target: "loot::aggregator",
                origin = %origin,
                loot_table = %target,
                entries,
                "Processed supplier"
            );
        }
        Ok(Ok((_, RouteOutcome::Skipped))) => report.skipped_disabled += 1,
        Ok(Err(RoutedError { target, err })) => {
            error!(
                target: "loot::aggregator",
                origin = %origin,
                loot_table = ?target.as_ref().map(ToString::to_string),
                kind = err.kind(),
                error = %error_chain(&err),
                "Failed to process loot supplier"
            );
            report.record(source_kind, origin, target, &err);
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!(
                target: "loot::aggregator",
                origin = %origin,
                panic = %message,
                "Loot supplier panicked"
            );
            report.failures.push(Failure {
                source: source_kind,
                origin,
                target: None,
                kind: "panic",
                message,
            });
        }
    }
}

/// Routing error tagged with the target when it was known.
struct RoutedError {
    target: Option<ResourceId>,
    err: LootError,
}

impl From<LootError> for RoutedError {
    fn from(err: LootError) -> Self {
        RoutedError { target: None, err }
    }
}

/// Renders an error and all of its sources as `outer: inner: ...`.
pub(crate) fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

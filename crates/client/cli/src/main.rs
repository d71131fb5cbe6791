//! Runs one supplier aggregation pass over a data directory and prints the
//! resulting buckets.
mod config;
mod logging;

use std::sync::Arc;

use anyhow::{Context, Result};
use config::{CliConfig, OutputFormat};
use loot_content::{ConfigLoader, ContentFactory, ItemLoader};
use loot_runtime::{
    AggregationReport, LootSinks, ReloadContext, ReloadCoordinator, SupplierRegistry,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let factory = ContentFactory::new(&config.data_dir);
    let loot_config = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => factory.load_config()?,
    };
    let catalog = match &config.item_catalog {
        Some(path) => ItemLoader::load(path)?,
        None => factory.load_item_catalog()?,
    };
    info!(
        data_dir = %config.data_dir.display(),
        items = catalog.len(),
        "Loaded content"
    );

    // Discovery does blocking I/O; the pass itself runs on this task once it
    // completes.
    let discovery = factory.discovery();
    let discovered = tokio::task::spawn_blocking(move || discovery.discover())
        .await
        .context("discovery task failed")??;

    let context = ReloadContext::new(
        SupplierRegistry::new(),
        Arc::new(catalog),
        loot_config.toggles,
    );
    let mut coordinator = ReloadCoordinator::new(context);
    let mut sinks = LootSinks::new();
    let report = coordinator.run_pass(&discovered, &mut sinks);

    match config.output {
        OutputFormat::Text => print_text(&report, &sinks),
        OutputFormat::Json => {
            let output = serde_json::json!({ "report": report, "sinks": sinks });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn print_text(report: &AggregationReport, sinks: &LootSinks) {
    println!(
        "files: {} discovered, {} parsed, {} rejected",
        report.files.discovered, report.files.parsed, report.files.rejected
    );
    println!(
        "suppliers: {} processed, {} skipped (disabled), {} failed",
        report.processed,
        report.skipped_disabled,
        report.failures.len()
    );

    for map in sinks.maps() {
        if map.is_empty() {
            continue;
        }
        println!("\n[{}]", map.category());
        for bucket in map {
            match bucket.subject() {
                Some(subject) => println!("  {} ({subject})", bucket.id()),
                None => println!("  {}", bucket.id()),
            }
            for entry in bucket.entries() {
                let conditions: Vec<String> =
                    entry.conditions().iter().map(ToString::to_string).collect();
                if conditions.is_empty() {
                    println!("    {} x{}", entry.item(), entry.weight());
                } else {
                    println!(
                        "    {} x{} when {}",
                        entry.item(),
                        entry.weight(),
                        conditions.join(", ")
                    );
                }
            }
        }
    }

    if !report.failures.is_empty() {
        println!("\nfailures:");
        for failure in &report.failures {
            println!("  [{}] {}: {}", failure.kind, failure.origin, failure.message);
        }
    }
}

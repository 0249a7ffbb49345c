//! The `analyze` and `sources` commands: manifest loading, fixture reading,
//! pipeline invocation, report persistence, and the ranked summary printout.

use std::path::{Path, PathBuf};

use anyhow::Context;
use laris_core::{load_sources, AppConfig, RawListing, Report, SourceBatch, SourceConfig};
use laris_pipeline::{run, GrowthStrategy, NeutralGrowth, SimulatedGrowth};

/// Loads all sources, runs the pipeline, writes the JSON report, and prints
/// the ranked category summary.
pub fn run_analyze(
    config: &AppConfig,
    output: Option<PathBuf>,
    simulated_growth: bool,
) -> anyhow::Result<()> {
    let sources_file = load_sources(&config.sources_path)?;
    let batches: Vec<SourceBatch> = sources_file
        .sources
        .iter()
        .map(load_source_batch)
        .collect();

    let growth: &dyn GrowthStrategy = if simulated_growth {
        &SimulatedGrowth
    } else {
        &NeutralGrowth
    };

    let report = run(batches, growth)?;

    let report_path = output.unwrap_or_else(|| config.report_path.clone());
    write_report(&report, &report_path)?;
    tracing::info!(path = %report_path.display(), "report written");

    print_summary(&report, config.summary_top_categories);
    Ok(())
}

/// Validates the manifest and prints one line per configured source.
pub fn list_sources(config: &AppConfig) -> anyhow::Result<()> {
    let sources_file = load_sources(&config.sources_path)?;
    println!("{} configured source(s):", sources_file.sources.len());
    for source in &sources_file.sources {
        println!(
            "  {} -> {}",
            source.marketplace,
            source.listings_path.display()
        );
    }
    Ok(())
}

/// Reads one source's raw-listing JSON into a batch.
///
/// A missing or malformed fixture degrades to an empty batch so the run can
/// continue on the remaining sources, mirroring a collector that failed to
/// extract anything.
fn load_source_batch(source: &SourceConfig) -> SourceBatch {
    let listings = match std::fs::read_to_string(&source.listings_path) {
        Ok(content) => match serde_json::from_str::<Vec<RawListing>>(&content) {
            Ok(listings) => listings,
            Err(e) => {
                tracing::warn!(
                    marketplace = %source.marketplace,
                    error = %e,
                    "listings file is not valid raw-listing JSON; treating source as empty"
                );
                vec![]
            }
        },
        Err(e) => {
            tracing::warn!(
                marketplace = %source.marketplace,
                path = %source.listings_path.display(),
                error = %e,
                "could not read listings file; treating source as empty"
            );
            vec![]
        }
    };

    SourceBatch {
        marketplace: source.marketplace.clone(),
        listings,
    }
}

fn write_report(report: &Report, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}

fn print_summary(report: &Report, top_n: usize) {
    println!(
        "Analyzed {} listings into {} categories",
        report.total_listings,
        report.categories.len()
    );
    if report.categories.is_empty() {
        return;
    }
    println!("Top categories by volume:");
    for (idx, category) in report.top_categories(top_n).iter().enumerate() {
        println!(
            "{:>2}. {} - {} products - {} sold - {} competition",
            idx + 1,
            category.name,
            category.product_count,
            category.total_sold,
            category.competition_level
        );
    }
}

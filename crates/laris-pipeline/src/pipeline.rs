//! Run orchestration: batches in, ranked report out.

use chrono::Utc;
use laris_core::{Listing, Report, SourceBatch};

use crate::aggregate::aggregate;
use crate::categorize::assign_category;
use crate::error::PipelineError;
use crate::growth::{GrowthStrategy, NeutralGrowth};
use crate::normalize::normalize_listing;

/// Runs the full pipeline over all source batches.
///
/// Batches are consumed in the order given; raw listings are normalized
/// (dropping those without a name or price field), categorized, and
/// aggregated into ranked category summaries. A source that contributed
/// nothing degrades the run to the remaining sources; an all-empty input
/// yields an empty report, not an error.
///
/// Raw listings with an empty `marketplace` inherit the batch's id before
/// normalization.
///
/// # Errors
///
/// Returns [`PipelineError`] only on internal invariant violations (see
/// [`aggregate`]); data-quality problems never fail the run.
pub fn run(
    sources: Vec<SourceBatch>,
    growth: &dyn GrowthStrategy,
) -> Result<Report, PipelineError> {
    let mut listings: Vec<Listing> = Vec::new();

    for batch in sources {
        if batch.is_empty() {
            tracing::info!(
                marketplace = %batch.marketplace,
                "source contributed no raw listings"
            );
            continue;
        }

        let before = listings.len();
        let raw_count = batch.listings.len();

        for mut raw in batch.listings {
            if raw.marketplace.is_empty() {
                raw.marketplace = batch.marketplace.clone();
            }
            match normalize_listing(raw) {
                Some(mut listing) => {
                    assign_category(&mut listing);
                    listings.push(listing);
                }
                None => {
                    tracing::debug!(
                        marketplace = %batch.marketplace,
                        "dropped raw listing without usable name or price field"
                    );
                }
            }
        }

        tracing::debug!(
            marketplace = %batch.marketplace,
            raw = raw_count,
            kept = listings.len() - before,
            "normalized source batch"
        );
    }

    let categories = aggregate(&listings, growth)?;

    tracing::info!(
        total_listings = listings.len(),
        categories = categories.len(),
        "pipeline run complete"
    );

    Ok(Report {
        generated_at: Utc::now(),
        total_listings: listings.len(),
        categories,
        raw_listings: listings,
    })
}

/// [`run`] with the deterministic [`NeutralGrowth`] strategy.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_with_default_growth(sources: Vec<SourceBatch>) -> Result<Report, PipelineError> {
    run(sources, &NeutralGrowth)
}

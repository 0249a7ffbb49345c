//! Grouping of labeled listings into ranked category summaries.

use laris_core::{CategorySummary, CompetitionLevel, Listing};
use uuid::Uuid;

use crate::error::PipelineError;
use crate::growth::GrowthStrategy;

/// How many listings each category summary retains, in assignment order.
pub const TOP_LISTINGS_PER_CATEGORY: usize = 5;

/// Groups labeled listings by category and computes per-category metrics.
///
/// Groups form in first-seen order and keep input order within the group.
/// The returned summaries are ranked by descending `total_sold`; ties keep
/// first-seen order (the sort is stable).
///
/// # Errors
///
/// Returns [`PipelineError::Uncategorized`] when a listing reaches
/// aggregation with no category assigned. This is an internal invariant
/// violation, not a data-quality condition.
pub fn aggregate(
    listings: &[Listing],
    growth: &dyn GrowthStrategy,
) -> Result<Vec<CategorySummary>, PipelineError> {
    // First-seen order matters for ranking ties, so groups live in a Vec
    // rather than a map. The table caps out at the rule count plus the
    // fallback, so the linear scan is fine.
    let mut groups: Vec<(String, Vec<Listing>)> = Vec::new();

    for listing in listings {
        let category = listing
            .category
            .clone()
            .ok_or_else(|| PipelineError::Uncategorized {
                name: listing.name.clone(),
            })?;

        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, members)) => members.push(listing.clone()),
            None => groups.push((category, vec![listing.clone()])),
        }
    }

    let mut summaries = groups
        .into_iter()
        .map(|(name, members)| summarize(name, &members, growth))
        .collect::<Result<Vec<_>, _>>()?;

    // Vec::sort_by is stable: equal volumes keep first-seen order.
    summaries.sort_by(|a, b| b.total_sold.cmp(&a.total_sold));

    Ok(summaries)
}

fn summarize(
    name: String,
    members: &[Listing],
    growth: &dyn GrowthStrategy,
) -> Result<CategorySummary, PipelineError> {
    // Groups only form from at least one listing; an empty group here is a
    // bug in the grouping loop, surfaced rather than divided through.
    if members.is_empty() {
        return Err(PipelineError::EmptyCategoryGroup { category: name });
    }

    let product_count = members.len();
    let total_sold: u64 = members.iter().map(|l| l.sold_count).sum();
    let price_sum: u64 = members.iter().map(|l| l.price_amount).sum();

    // Round-half-up integer mean, no float detour.
    let count = product_count as u64;
    let average_price = (price_sum + count / 2) / count;

    let growth_score = growth.score(&name, members);
    let top_listings = members
        .iter()
        .take(TOP_LISTINGS_PER_CATEGORY)
        .cloned()
        .collect();

    Ok(CategorySummary {
        id: Uuid::new_v4(),
        name,
        product_count,
        total_sold,
        average_price,
        competition_level: CompetitionLevel::from_product_count(product_count),
        growth_score,
        top_listings,
    })
}

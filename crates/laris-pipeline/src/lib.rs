//! Trend-analysis pipeline for marketplace listings.
//!
//! Takes raw listing batches produced by marketplace collectors, normalizes
//! them into typed [`laris_core::Listing`] records, assigns each a market
//! category from an ordered keyword-rule table, and aggregates per-category
//! metrics (volume sold, average price, competition level, growth signal)
//! into a ranked [`laris_core::Report`].
//!
//! Every stage is a pure function over in-memory sequences; the pipeline
//! holds no shared state and is safe to invoke repeatedly or in parallel
//! across independent runs.

pub mod aggregate;
pub mod categorize;
pub mod error;
pub mod growth;
pub mod normalize;
pub mod pipeline;

mod extract;

pub use aggregate::{aggregate, TOP_LISTINGS_PER_CATEGORY};
pub use categorize::{assign_category, categorize, CategoryRule, CATEGORY_RULES, FALLBACK_CATEGORY};
pub use error::PipelineError;
pub use growth::{GrowthStrategy, NeutralGrowth, SimulatedGrowth};
pub use normalize::normalize_listing;
pub use pipeline::{run, run_with_default_growth};

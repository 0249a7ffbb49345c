//! Growth-signal strategies.
//!
//! A real growth metric needs a historical snapshot store, which is out of
//! scope for this layer. The signal is therefore produced by a pluggable
//! strategy: the default returns a fixed neutral constant so pipeline runs
//! stay deterministic, and [`SimulatedGrowth`] reproduces the original
//! random heuristic for demo output.

use laris_core::Listing;

/// Neutral score reported by [`NeutralGrowth`] for every category.
pub const NEUTRAL_GROWTH_SCORE: i32 = 100;

/// Produces the growth signal for one category group.
pub trait GrowthStrategy {
    /// Scores a category given its label and member listings.
    fn score(&self, category: &str, members: &[Listing]) -> i32;
}

/// Default strategy: a fixed neutral constant for every category.
///
/// Keeps runs deterministic; two runs over the same input produce
/// byte-identical category metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralGrowth;

impl GrowthStrategy for NeutralGrowth {
    fn score(&self, _category: &str, _members: &[Listing]) -> i32 {
        NEUTRAL_GROWTH_SCORE
    }
}

/// Simulated strategy: a uniform pseudo-random score in `70..150`.
///
/// This is the legacy placeholder heuristic, kept for demo reports that
/// want visually varied growth columns. Never use it where determinism
/// matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedGrowth;

impl GrowthStrategy for SimulatedGrowth {
    #[allow(clippy::cast_possible_truncation)] // value is in [70, 150) before the cast
    fn score(&self, _category: &str, _members: &[Listing]) -> i32 {
        (70.0 + rand::random::<f64>() * 80.0) as i32
    }
}

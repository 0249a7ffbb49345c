//! Aggregated report types: category summaries and the run-level report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::Listing;

/// Coarse competition bucket derived from how many listings occupy a
/// category in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
}

impl CompetitionLevel {
    /// Derives the bucket from a category's product count.
    ///
    /// Thresholds: more than 15 listings is `High`, more than 8 is `Medium`,
    /// otherwise `Low` (so 9-15 is medium and 16+ is high).
    #[must_use]
    pub fn from_product_count(count: usize) -> Self {
        if count > 15 {
            CompetitionLevel::High
        } else if count > 8 {
            CompetitionLevel::Medium
        } else {
            CompetitionLevel::Low
        }
    }
}

impl std::fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompetitionLevel::Low => write!(f, "low"),
            CompetitionLevel::Medium => write!(f, "medium"),
            CompetitionLevel::High => write!(f, "high"),
        }
    }
}

/// Per-category aggregate produced by one pipeline run.
///
/// Created once by the aggregator and never updated incrementally; a new
/// run recomputes the full report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    /// Run-scoped identifier; uniqueness across runs is not guaranteed.
    pub id: Uuid,
    /// Category label, e.g. `"Fashion Muslim"`.
    pub name: String,
    /// Number of listings assigned to this category.
    pub product_count: usize,
    /// Sum of `sold_count` over the category's listings.
    pub total_sold: u64,
    /// Rounded mean of `price_amount` over the category's listings.
    pub average_price: u64,
    pub competition_level: CompetitionLevel,
    /// Trend signal from the configured growth strategy. Without a
    /// historical store this is a placeholder, not a measurement.
    pub growth_score: i32,
    /// First five listings assigned to the category, in assignment order.
    pub top_listings: Vec<Listing>,
}

/// Output of one full pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    /// Count of listings that survived normalization across all sources.
    pub total_listings: usize,
    /// Category summaries ranked by descending `total_sold`, ties kept in
    /// first-seen order.
    pub categories: Vec<CategorySummary>,
    /// The full labeled listing sequence, concatenation order.
    pub raw_listings: Vec<Listing>,
}

impl Report {
    /// Returns at most the first `n` ranked categories.
    #[must_use]
    pub fn top_categories(&self, n: usize) -> &[CategorySummary] {
        &self.categories[..self.categories.len().min(n)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_summary(name: &str, total_sold: u64) -> CategorySummary {
        CategorySummary {
            id: Uuid::new_v4(),
            name: name.to_string(),
            product_count: 1,
            total_sold,
            average_price: 10_000,
            competition_level: CompetitionLevel::Low,
            growth_score: 100,
            top_listings: vec![],
        }
    }

    #[test]
    fn competition_low_at_eight_or_fewer() {
        assert_eq!(
            CompetitionLevel::from_product_count(0),
            CompetitionLevel::Low
        );
        assert_eq!(
            CompetitionLevel::from_product_count(8),
            CompetitionLevel::Low
        );
    }

    #[test]
    fn competition_medium_between_nine_and_fifteen() {
        assert_eq!(
            CompetitionLevel::from_product_count(9),
            CompetitionLevel::Medium
        );
        assert_eq!(
            CompetitionLevel::from_product_count(15),
            CompetitionLevel::Medium
        );
    }

    #[test]
    fn competition_high_above_fifteen() {
        assert_eq!(
            CompetitionLevel::from_product_count(16),
            CompetitionLevel::High
        );
        assert_eq!(
            CompetitionLevel::from_product_count(100),
            CompetitionLevel::High
        );
    }

    #[test]
    fn competition_level_serializes_lowercase() {
        let json = serde_json::to_string(&CompetitionLevel::Medium).expect("serialization failed");
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn report_serializes_camel_case_contract_fields() {
        let report = Report {
            generated_at: Utc::now(),
            total_listings: 1,
            categories: vec![make_summary("Skincare", 500)],
            raw_listings: vec![],
        };
        let json = serde_json::to_value(&report).expect("serialization failed");
        assert!(json.get("generatedAt").is_some());
        assert_eq!(json["totalListings"], 1);
        assert_eq!(json["categories"][0]["totalSold"], 500);
        assert_eq!(json["categories"][0]["competitionLevel"], "low");
        assert_eq!(json["categories"][0]["growthScore"], 100);
        assert!(json.get("rawListings").is_some());
    }

    #[test]
    fn top_categories_caps_at_available_count() {
        let report = Report {
            generated_at: Utc::now(),
            total_listings: 2,
            categories: vec![make_summary("Sepatu", 200), make_summary("Fashion", 100)],
            raw_listings: vec![],
        };
        assert_eq!(report.top_categories(10).len(), 2);
        assert_eq!(report.top_categories(1).len(), 1);
        assert_eq!(report.top_categories(1)[0].name, "Sepatu");
    }
}

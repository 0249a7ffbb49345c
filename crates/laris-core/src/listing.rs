//! Raw and normalized listing types.
//!
//! ## Observed shape from marketplace collectors (Tokopedia, Shopee)
//!
//! Collectors emit one JSON record per product card, camelCase keys, every
//! field free text exactly as it appeared on the page:
//!
//! - `priceText` keeps the full display string (`"Rp1.250.000"`). Digits are
//!   extracted during normalization; the collector does no cleanup.
//! - `soldText` carries locale suffixes (`"1rb+ terjual"`, `"100+ sold"`).
//!   Shopee sometimes omits it entirely.
//! - `ratingText` may embed the rating among other text (`"4.9 | Jakarta"`)
//!   or be absent (Shopee cards expose no rating to the collector).
//! - `shopName` is absent or empty for marketplaces whose cards do not show
//!   the seller; normalization substitutes [`UNKNOWN_SHOP`].
//! - `marketplace` identifies the source; collectors that batch per source
//!   may leave it empty and rely on the batch-level id.

use serde::{Deserialize, Serialize};

/// Sentinel shop name used when a raw listing carries no seller information.
pub const UNKNOWN_SHOP: &str = "Unknown";

/// A single product card as delivered by a marketplace collector, before any
/// validation or cleanup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    /// Product display name. Required for the listing to survive
    /// normalization; may carry surrounding whitespace.
    #[serde(default)]
    pub name: Option<String>,

    /// Display price with arbitrary formatting (`"Rp1.250.000"`). A listing
    /// with no price field at all is dropped; a present-but-digitless price
    /// normalizes to 0.
    #[serde(default)]
    pub price_text: Option<String>,

    /// Product image URL, absolute or relative.
    #[serde(default)]
    pub image_url: Option<String>,

    /// Free text containing a decimal rating, possibly embedded among other
    /// text (`"4.9 | Jakarta Barat"`).
    #[serde(default)]
    pub rating_text: Option<String>,

    /// Free text containing a sold count, possibly suffixed
    /// (`"1rb+ terjual"`).
    #[serde(default)]
    pub sold_text: Option<String>,

    /// Seller display name. Empty string is treated as absent.
    #[serde(default)]
    pub shop_name: Option<String>,

    /// Originating source id (`"tokopedia"`, `"shopee"`). May be empty when
    /// the collector batches per source; the orchestrator backfills it from
    /// the batch.
    #[serde(default)]
    pub marketplace: String,

    /// Listing URL on the marketplace.
    #[serde(default)]
    pub url: Option<String>,
}

/// A validated, normalized listing ready for categorization and aggregation.
///
/// Created once per pipeline run; immutable afterwards except for the single
/// `category` assignment made by the categorizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Trimmed, non-empty product name.
    pub name: String,
    /// Price in the smallest currency unit, digits-only interpretation of
    /// the raw price text. 0 when the raw price carried no digits.
    pub price_amount: u64,
    pub image_url: Option<String>,
    /// Rating clamped to `[0.0, 5.0]`; 0.0 when absent or unparsable.
    pub rating: f64,
    /// Units sold, digits-only interpretation of the raw sold text.
    /// 0 when absent or unparsable.
    pub sold_count: u64,
    /// Seller name, [`UNKNOWN_SHOP`] when the source provided none.
    pub shop_name: String,
    pub marketplace: String,
    pub url: Option<String>,
    /// Category label assigned by the categorizer; `None` until
    /// categorization runs.
    pub category: Option<String>,
}

/// All raw listings one marketplace source contributed to a run.
///
/// Batches are consumed by the orchestrator in the order they are supplied;
/// that order, then within-batch order, defines the concatenation order of
/// the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceBatch {
    /// Source id this batch came from (`"tokopedia"`, `"shopee"`).
    pub marketplace: String,
    pub listings: Vec<RawListing>,
}

impl SourceBatch {
    /// Returns `true` when the source contributed no raw listings at all,
    /// e.g. the collector failed to extract anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_listing_deserializes_collector_shape() {
        let json = r#"{
            "name": "Gamis Syari Premium",
            "priceText": "Rp189.000",
            "imageUrl": "https://images.tokopedia.net/p/1.jpg",
            "ratingText": "4.9",
            "soldText": "1rb+ terjual",
            "shopName": "Toko Hijab Amanah",
            "marketplace": "tokopedia",
            "url": "https://www.tokopedia.com/p/gamis-syari"
        }"#;
        let raw: RawListing = serde_json::from_str(json).expect("deserialization failed");
        assert_eq!(raw.name.as_deref(), Some("Gamis Syari Premium"));
        assert_eq!(raw.price_text.as_deref(), Some("Rp189.000"));
        assert_eq!(raw.sold_text.as_deref(), Some("1rb+ terjual"));
        assert_eq!(raw.marketplace, "tokopedia");
    }

    #[test]
    fn raw_listing_all_fields_optional_except_marketplace_defaults_empty() {
        let raw: RawListing = serde_json::from_str("{}").expect("deserialization failed");
        assert!(raw.name.is_none());
        assert!(raw.price_text.is_none());
        assert!(raw.sold_text.is_none());
        assert_eq!(raw.marketplace, "");
    }

    #[test]
    fn listing_serializes_camel_case() {
        let listing = Listing {
            name: "Charger 20W".to_string(),
            price_amount: 45_000,
            image_url: None,
            rating: 4.5,
            sold_count: 230,
            shop_name: UNKNOWN_SHOP.to_string(),
            marketplace: "shopee".to_string(),
            url: None,
            category: Some("Gadget Accessories".to_string()),
        };
        let json = serde_json::to_value(&listing).expect("serialization failed");
        assert_eq!(json["priceAmount"], 45_000);
        assert_eq!(json["soldCount"], 230);
        assert_eq!(json["shopName"], UNKNOWN_SHOP);
        assert_eq!(json["category"], "Gadget Accessories");
    }

    #[test]
    fn source_batch_is_empty() {
        let batch = SourceBatch {
            marketplace: "tokopedia".to_string(),
            listings: vec![],
        };
        assert!(batch.is_empty());

        let batch = SourceBatch {
            marketplace: "tokopedia".to_string(),
            listings: vec![RawListing::default()],
        };
        assert!(!batch.is_empty());
    }
}

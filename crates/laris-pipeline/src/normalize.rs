//! Normalization from raw collector fragments to [`laris_core::Listing`].
//!
//! Digit and decimal extraction is delegated to [`crate::extract`]; this
//! module focuses on the keep-or-drop decision and field defaulting.

use laris_core::{Listing, RawListing, UNKNOWN_SHOP};

use crate::extract::{digits, first_decimal};

/// Maximum rating value marketplaces display; extracted ratings are clamped
/// into `[0.0, MAX_RATING]` before storage.
const MAX_RATING: f64 = 5.0;

/// Normalizes one raw listing into a typed [`Listing`].
///
/// Returns `None` — the listing is dropped — when the name is missing or
/// trims to empty, or when no price field is present at all. This is the
/// only filtering rule: a price field that is present but contains zero
/// digits is accepted and yields `price_amount = 0`.
///
/// Unparsable optional fields never drop a listing; they default to the
/// documented neutral values (rating 0.0, sold count 0, shop
/// [`UNKNOWN_SHOP`]).
#[must_use]
pub fn normalize_listing(raw: RawListing) -> Option<Listing> {
    let name = raw.name.as_deref()?.trim();
    if name.is_empty() {
        return None;
    }
    let price_text = raw.price_text.as_deref()?;

    let price_amount = digits(price_text).unwrap_or(0);

    let rating = raw
        .rating_text
        .as_deref()
        .and_then(first_decimal)
        .unwrap_or(0.0)
        .clamp(0.0, MAX_RATING);

    let sold_count = raw
        .sold_text
        .as_deref()
        .and_then(digits)
        .unwrap_or(0);

    // Empty shop name is treated as absent.
    let shop_name = raw
        .shop_name
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_SHOP.to_string());

    Some(Listing {
        name: name.to_string(),
        price_amount,
        image_url: raw.image_url,
        rating,
        sold_count,
        shop_name,
        marketplace: raw.marketplace,
        url: raw.url,
        category: None,
    })
}

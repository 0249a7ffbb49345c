//! Keyword-rule categorization of normalized listings.
//!
//! Rules live in an explicit ordered table so the tie-break policy is part
//! of the contract: the table is evaluated top-down and the first rule whose
//! keyword set matches wins, regardless of how many later rules would also
//! match.

use laris_core::Listing;

/// One row of the category rule table.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    /// Lowercase keywords; any one matching assigns the category.
    pub keywords: &'static [&'static str],
    /// Category label assigned on match.
    pub category: &'static str,
}

/// Label assigned when no rule matches. Always matches, so categorization
/// is total.
pub const FALLBACK_CATEGORY: &str = "Lainnya";

/// Ordered rule table. Position is priority: a name containing keywords
/// from several rows resolves to the earliest row.
///
/// Keywords are matched by case-insensitive substring containment against
/// the listing name; no stemming or tokenization.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        keywords: &["hijab", "gamis", "muslim"],
        category: "Fashion Muslim",
    },
    CategoryRule {
        keywords: &["gadget", "hp", "charger", "kabel"],
        category: "Gadget Accessories",
    },
    CategoryRule {
        keywords: &["skincare", "serum", "cream"],
        category: "Skincare",
    },
    CategoryRule {
        keywords: &["kitchen", "dapur", "panci"],
        category: "Alat Dapur",
    },
    CategoryRule {
        keywords: &["mainan", "toy", "anak"],
        category: "Mainan Anak",
    },
    CategoryRule {
        keywords: &["olahraga", "sport", "fitness"],
        category: "Olahraga",
    },
    CategoryRule {
        keywords: &["tanaman", "plant", "pot"],
        category: "Tanaman Hias",
    },
    CategoryRule {
        keywords: &["bayi", "baby"],
        category: "Perlengkapan Bayi",
    },
    CategoryRule {
        keywords: &["fashion", "baju", "celana"],
        category: "Fashion",
    },
    CategoryRule {
        keywords: &["sepatu", "shoes", "sandal"],
        category: "Sepatu",
    },
];

/// Returns the category label for a listing.
///
/// Total: falls back to [`FALLBACK_CATEGORY`] when no rule matches.
#[must_use]
pub fn categorize(listing: &Listing) -> &'static str {
    let lower = listing.name.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw)))
        .map_or(FALLBACK_CATEGORY, |rule| rule.category)
}

/// Applies [`categorize`] to the listing's `category` field.
pub fn assign_category(listing: &mut Listing) {
    listing.category = Some(categorize(listing).to_owned());
}

//! End-to-end run over collector-shaped JSON batches.

use laris_core::{RawListing, SourceBatch};
use laris_pipeline::{run_with_default_growth, TOP_LISTINGS_PER_CATEGORY};

fn tokopedia_batch() -> SourceBatch {
    let listings: Vec<RawListing> = serde_json::from_str(
        r#"[
            {
                "name": "Gamis Syari Premium Jumbo",
                "priceText": "Rp189.000",
                "imageUrl": "https://images.tokopedia.net/p/gamis.jpg",
                "ratingText": "4.9",
                "soldText": "1rb+ terjual",
                "shopName": "Toko Hijab Amanah",
                "url": "https://www.tokopedia.com/p/gamis-syari"
            },
            {
                "name": "Hijab Pashmina Plisket",
                "priceText": "Rp35.000",
                "ratingText": "4.8 | Bandung",
                "soldText": "750 terjual"
            },
            {
                "name": "  Charger GaN 65W  ",
                "priceText": "Rp145.000",
                "soldText": "300 terjual"
            },
            {
                "name": "",
                "priceText": "Rp99.000",
                "soldText": "40 terjual"
            },
            {
                "name": "Serum Niacinamide 10%",
                "priceText": "Gratis sampel",
                "soldText": "120 terjual"
            }
        ]"#,
    )
    .expect("tokopedia fixture should parse");
    SourceBatch {
        marketplace: "tokopedia".to_string(),
        listings,
    }
}

fn shopee_batch() -> SourceBatch {
    let listings: Vec<RawListing> = serde_json::from_str(
        r#"[
            {
                "name": "Kabel Data Type-C 2m",
                "priceText": "Rp25.000",
                "soldText": "900 sold"
            },
            {
                "name": "Gamis Fashion Kekinian",
                "priceText": "Rp99.000",
                "soldText": "600 sold"
            },
            {
                "soldText": "10 sold"
            }
        ]"#,
    )
    .expect("shopee fixture should parse");
    SourceBatch {
        marketplace: "shopee".to_string(),
        listings,
    }
}

#[test]
fn full_run_produces_ranked_report() {
    let report = run_with_default_growth(vec![tokopedia_batch(), shopee_batch()])
        .expect("pipeline run failed");

    // 8 raw listings, 2 dropped: the empty name and the missing name/price.
    assert_eq!(report.total_listings, 6);
    assert_eq!(report.raw_listings.len(), 6);

    // Name trimming and backfilled marketplace ids.
    let charger = &report.raw_listings[2];
    assert_eq!(charger.name, "Charger GaN 65W");
    assert_eq!(charger.marketplace, "tokopedia");
    assert_eq!(report.raw_listings[4].marketplace, "shopee");

    // Digitless price retained at zero, "1rb+" kept literal.
    assert_eq!(report.raw_listings[3].price_amount, 0);
    assert_eq!(report.raw_listings[0].sold_count, 1);

    // "Gamis Fashion Kekinian" matches both the Fashion Muslim and Fashion
    // rules; the earlier rule wins.
    assert_eq!(
        report.raw_listings[5].category.as_deref(),
        Some("Fashion Muslim")
    );

    // Volumes: Fashion Muslim 1351, Gadget Accessories 1200, Skincare 120.
    let names: Vec<&str> = report.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Fashion Muslim", "Gadget Accessories", "Skincare"]
    );

    let fashion_muslim = &report.categories[0];
    assert_eq!(fashion_muslim.product_count, 3);
    assert_eq!(fashion_muslim.total_sold, 1351);
    assert!(fashion_muslim.top_listings.len() <= TOP_LISTINGS_PER_CATEGORY);
    assert_eq!(fashion_muslim.top_listings[0].name, "Gamis Syari Premium Jumbo");
}

#[test]
fn report_serializes_with_contract_field_names() {
    let report = run_with_default_growth(vec![tokopedia_batch()]).expect("pipeline run failed");
    let json = serde_json::to_value(&report).expect("report should serialize");

    assert!(json.get("generatedAt").is_some());
    assert!(json.get("totalListings").is_some());
    let category = &json["categories"][0];
    for key in [
        "id",
        "name",
        "productCount",
        "totalSold",
        "averagePrice",
        "competitionLevel",
        "growthScore",
        "topListings",
    ] {
        assert!(category.get(key).is_some(), "missing category key {key}");
    }
    assert!(json.get("rawListings").is_some());
}

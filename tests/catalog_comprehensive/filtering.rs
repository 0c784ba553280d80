//! Filtering Tests
//!
//! Matching rules over the destination fixture:
//! - Case-insensitive exact match on top-level strings
//! - Literal "true" rule for booleans
//! - Case-insensitive substring match inside details
//! - Missing and mistyped fields never match

use crate::*;

#[tokio::test]
async fn test_empty_query_returns_whole_snapshot_in_order() {
    let (_dir, catalog) = destinations_catalog().await;
    let all = catalog.query(Query::new()).await.unwrap();
    assert_eq!(all, catalog.list().await.into_records());
    assert_eq!(
        names(&all),
        vec![
            "Maasai Mara National Reserve",
            "Serengeti National Park",
            "Ha Long Bay",
            "Komodo National Park",
            "Uluru"
        ]
    );
}

#[tokio::test]
async fn test_country_match_ignores_case() {
    let (_dir, catalog) = destinations_catalog().await;
    let hits = catalog.query(Query::parse("country=kenya")).await.unwrap();
    assert_eq!(names(&hits), vec!["Maasai Mara National Reserve"]);

    let hits = catalog.query(Query::parse("country=TANZANIA")).await.unwrap();
    assert_eq!(names(&hits), vec!["Serengeti National Park"]);
}

#[tokio::test]
async fn test_top_level_match_is_exact_not_substring() {
    let (_dir, catalog) = destinations_catalog().await;
    assert!(catalog.query(Query::parse("name=uluru")).await.unwrap().len() == 1);
    assert!(catalog.query(Query::parse("name=ulu")).await.unwrap().is_empty());
    assert!(catalog.query(Query::parse("location=Mara")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fun_fact_substring_match() {
    let (_dir, catalog) = destinations_catalog().await;
    let hits = catalog.query(Query::parse("fun_fact=elephant")).await.unwrap();
    assert_eq!(names(&hits), vec!["Maasai Mara National Reserve"]);

    let hits = catalog.query(Query::parse("fun_fact=giraffe")).await.unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_description_matches_any_detail_entry() {
    let (_dir, catalog) = destinations_catalog().await;
    // Serengeti's description lives in its second details entry
    let hits = catalog.query(Query::parse("description=ENDLESS")).await.unwrap();
    assert_eq!(names(&hits), vec!["Serengeti National Park"]);
}

#[tokio::test]
async fn test_nested_filter_skips_records_without_details() {
    let (_dir, catalog) = destinations_catalog().await;
    let hits = catalog.query(Query::parse("fun_fact=")).await.unwrap();
    assert_eq!(hits.len(), 4);
    assert!(!names(&hits).contains(&"Uluru".to_string()));
}

#[tokio::test]
async fn test_boolean_filter() {
    let (_dir, catalog) = destinations_catalog().await;
    let open = catalog.query(Query::parse("is_open_to_public=true")).await.unwrap();
    assert_eq!(open.len(), 3);

    let closed = catalog.query(Query::parse("is_open_to_public=false")).await.unwrap();
    assert_eq!(names(&closed), vec!["Komodo National Park"]);

    // "True" is not the literal "true"
    let closed = catalog.query(Query::parse("is_open_to_public=True")).await.unwrap();
    assert_eq!(names(&closed), vec!["Komodo National Park"]);
}

#[tokio::test]
async fn test_missing_boolean_field_is_no_match() {
    let (_dir, catalog) = destinations_catalog().await;
    let hits = catalog
        .query(Query::parse("name=Uluru&is_open_to_public=true"))
        .await
        .unwrap();
    assert!(hits.is_empty());

    let hits = catalog
        .query(Query::parse("name=Uluru&is_open_to_public=false"))
        .await
        .unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_combined_filters_are_conjunctive() {
    let (_dir, catalog) = destinations_catalog().await;
    let hits = catalog
        .query(Query::parse("continent=asia&is_open_to_public=true&fun_fact=limestone"))
        .await
        .unwrap();
    assert_eq!(names(&hits), vec!["Ha Long Bay"]);
}

#[tokio::test]
async fn test_filter_by_uuid() {
    let (_dir, catalog) = destinations_catalog().await;
    let hits = catalog
        .query(Query::parse("uuid=7E8F9A0B-1C2D-4E3F-9A4B-5C6D7E8F9A0B"))
        .await
        .unwrap();
    assert_eq!(names(&hits), vec!["Uluru"]);
}

#[tokio::test]
async fn test_percent_encoded_values() {
    let (_dir, catalog) = destinations_catalog().await;
    let hits = catalog.query(Query::parse("name=Ha%20Long+Bay")).await.unwrap();
    assert_eq!(names(&hits), vec!["Ha Long Bay"]);
}

#[tokio::test]
async fn test_filtering_does_not_touch_disk() {
    let (dir, catalog) = destinations_catalog().await;
    let path = dir.path().join("data.json");
    let _ = catalog.query(Query::parse("continent=africa")).await.unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), DESTINATIONS);
}

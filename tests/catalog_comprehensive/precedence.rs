//! Precedence Tests
//!
//! Path-derived filters such as `/api/continent/Africa` are merged after
//! the query string and win on conflict.

use crate::*;

#[tokio::test]
async fn test_path_value_overrides_query_value() {
    let (_dir, catalog) = destinations_catalog().await;
    let hits = catalog
        .query_by_path("continent", "Africa", Query::parse("continent=Asia"))
        .await
        .unwrap();
    assert_eq!(
        names(&hits),
        vec!["Maasai Mara National Reserve", "Serengeti National Park"]
    );
}

#[tokio::test]
async fn test_path_filter_combines_with_other_keys() {
    let (_dir, catalog) = destinations_catalog().await;
    let hits = catalog
        .query_by_path("continent", "asia", Query::parse("is_open_to_public=false"))
        .await
        .unwrap();
    assert_eq!(names(&hits), vec!["Komodo National Park"]);
}

#[tokio::test]
async fn test_country_route() {
    let (_dir, catalog) = destinations_catalog().await;
    let hits = catalog
        .query_by_path("country", "vietnam", Query::new())
        .await
        .unwrap();
    assert_eq!(names(&hits), vec!["Ha Long Bay"]);
}

#[tokio::test]
async fn test_decoded_path_segment() {
    let (_dir, catalog) = destinations_catalog().await;
    let value = decode_path_segment("Narok%20County");
    let hits = catalog
        .query_by_path("location", &value, Query::new())
        .await
        .unwrap();
    assert_eq!(names(&hits), vec!["Maasai Mara National Reserve"]);
}

#[tokio::test]
async fn test_query_string_still_validated_on_path_routes() {
    let (_dir, catalog) = destinations_catalog().await;
    let err = catalog
        .query_by_path("continent", "Africa", Query::parse("zzz=1"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidFilterKey(key) if key == "zzz"));
}

#[test]
fn test_merge_keeps_original_key_position() {
    let merged = Query::parse("continent=Asia&name=x").with_path_filter("continent", "Africa");
    assert_eq!(merged.iter().collect::<Vec<_>>(), vec![("continent", "Africa"), ("name", "x")]);
}

//! Bootstrap Tests
//!
//! Read-path resilience when the snapshot file is absent or unusable, and
//! the write path's refusal to build on a snapshot it could not read.

use crate::*;

async fn catalog_over(contents: Option<&str>) -> (TempDir, Catalog) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    if let Some(text) = contents {
        std::fs::write(&path, text).unwrap();
    }
    let catalog = Catalog::builder()
        .path(&path)
        .no_durability()
        .open()
        .await
        .unwrap();
    (dir, catalog)
}

#[tokio::test]
async fn test_missing_file_loads_empty() {
    let (_dir, catalog) = catalog_over(None).await;
    assert!(catalog.list().await.is_empty());
    assert!(catalog.store().try_load().await.unwrap().is_empty());
    assert!(catalog.query(Query::parse("name=x")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_file_loads_empty() {
    let (_dir, catalog) = catalog_over(Some("")).await;
    assert!(catalog.list().await.is_empty());
    assert!(catalog.store().try_load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_corrupt_file_loads_empty_on_read_path() {
    for text in ["{oops", "{\"name\": \"not an array\"}", "[1, 2]"] {
        let (_dir, catalog) = catalog_over(Some(text)).await;
        assert!(catalog.list().await.is_empty(), "{}", text);
        assert!(catalog.query(Query::new()).await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_corrupt_file_is_reported_by_try_load() {
    let (_dir, catalog) = catalog_over(Some("[{\"name\": ")).await;
    let err = catalog.store().try_load().await.unwrap_err();
    assert!(err.to_string().contains("corrupt snapshot"));
}

#[tokio::test]
async fn test_append_does_not_overwrite_corrupt_file() {
    let corrupt = "[{\"name\": \"Petra\"},";
    let (dir, catalog) = catalog_over(Some(corrupt)).await;

    let err = catalog.append(sighting("Wadi Rum", "Ibex")).await.unwrap_err();
    assert!(matches!(err, Error::Corruption(_)));
    assert_eq!(err.status_code(), 500);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("data.json")).unwrap(),
        corrupt
    );
}

#[tokio::test]
async fn test_first_append_creates_file() {
    let (dir, catalog) = catalog_over(None).await;
    catalog.append(sighting("Kakadu", "Saltwater crocodile")).await.unwrap();

    let text = std::fs::read_to_string(dir.path().join("data.json")).unwrap();
    assert!(text.starts_with("[\n  {\n"));
    assert_eq!(catalog.list().await.len(), 1);
}

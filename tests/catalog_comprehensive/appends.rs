//! Append Tests
//!
//! Tests for the write path:
//! - Round trip through the snapshot file
//! - Identity assignment
//! - No lost updates under concurrent appends
//! - Malformed payloads and closed catalogs

use crate::*;
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn test_append_then_load_roundtrip() {
    let (_dir, catalog) = sightings_catalog().await;
    let first = catalog.append(sighting("Lake Naivasha", "Hippos")).await.unwrap();
    let draft = sighting("Amboseli", "Elephants");
    let second = catalog.append(draft.clone()).await.unwrap();

    let snapshot = catalog.list().await;
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.records()[0], first);

    let last = snapshot.last().unwrap();
    let uuid = last.uuid().unwrap();
    assert!(!uuid.is_empty());
    assert!(RecordId::parse(uuid).is_some());
    assert_eq!(last, &second);
    for key in ["location", "title", "text"] {
        assert_eq!(last.get(key), draft.get(key));
    }
}

#[tokio::test]
async fn test_appended_record_is_filterable() {
    let (_dir, catalog) = sightings_catalog().await;
    let saved = catalog.append(sighting("Etosha", "Black rhino")).await.unwrap();
    catalog.append(sighting("Chobe", "Buffalo")).await.unwrap();

    let query = Query::new().with_path_filter("uuid", saved.uuid().unwrap());
    let hits = catalog.query(query).await.unwrap();
    assert_eq!(hits, vec![saved]);

    let hits = catalog.query(Query::parse("location=chobe")).await.unwrap();
    assert_eq!(hits.len(), 1);
}

#[tokio::test]
async fn test_append_preserves_existing_records() {
    let (_dir, catalog) = destinations_catalog().await;
    let before = catalog.list().await;
    catalog
        .append(Draft::new().with("name", "Torres del Paine").with("continent", "South America"))
        .await
        .unwrap();

    let after = catalog.list().await;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after.records()[..before.len()], before.records());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_twenty_concurrent_appends() {
    let (_dir, catalog) = sightings_catalog().await;
    let catalog = Arc::new(catalog);

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let catalog = Arc::clone(&catalog);
            tokio::spawn(async move {
                catalog
                    .append(sighting("Kruger", &format!("Sighting {}", i)))
                    .await
            })
        })
        .collect();

    let mut returned = HashSet::new();
    for handle in handles {
        let record = handle.await.unwrap().unwrap();
        returned.insert(record.uuid().unwrap().to_string());
    }

    let snapshot = catalog.list().await;
    assert_eq!(snapshot.len(), 20);
    let stored: HashSet<_> = snapshot
        .iter()
        .map(|r| r.uuid().unwrap().to_string())
        .collect();
    assert_eq!(stored.len(), 20);
    assert_eq!(stored, returned);
    assert_eq!(catalog.stats().appends_committed, 20);
}

#[tokio::test]
async fn test_append_json_payload() {
    let (_dir, catalog) = sightings_catalog().await;
    let saved = catalog
        .append_json(r#"{"location": "Ngorongoro", "title": "Lion pride", "text": "Nine lions"}"#)
        .await
        .unwrap();
    assert_eq!(saved.keys().last(), Some("uuid"));
    assert_eq!(catalog.list().await.len(), 1);
}

#[tokio::test]
async fn test_malformed_payload_is_rejected_before_storage() {
    let (dir, catalog) = sightings_catalog().await;
    for payload in ["{\"title\": ", "[1, 2, 3]", "\"just a string\""] {
        let err = catalog.append_json(payload).await.unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)), "{}", payload);
        assert_eq!(err.status_code(), 400);
    }
    assert!(!dir.path().join("data").join("data.json").exists());
    assert_eq!(catalog.stats().appends_failed, 0);
}

#[tokio::test]
async fn test_client_supplied_uuid_is_replaced() {
    let (_dir, catalog) = sightings_catalog().await;
    let saved = catalog
        .append(sighting("Samburu", "Gerenuk").with("uuid", "my-own-id"))
        .await
        .unwrap();
    assert_ne!(saved.uuid(), Some("my-own-id"));
    assert!(RecordId::parse(saved.uuid().unwrap()).is_some());
}

#[tokio::test]
async fn test_closed_catalog_rejects_appends() {
    let (_dir, catalog) = sightings_catalog().await;
    catalog.append(sighting("Tsavo", "Red elephants")).await.unwrap();
    catalog.close().await;

    let err = catalog.append(sighting("Tsavo", "Lesser kudu")).await.unwrap_err();
    assert!(matches!(err, Error::Closed));
    assert_eq!(catalog.list().await.len(), 1);
}

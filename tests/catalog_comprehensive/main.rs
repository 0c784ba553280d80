//! Catalog Comprehensive Test Suite
//!
//! Tests organized by functionality:
//! - filtering: Top-level and nested matching rules
//! - validation: Allowlist checks and their ordering
//! - precedence: Path-derived filters vs query-string filters
//! - appends: Round trips, identity assignment, concurrency
//! - bootstrap: Missing, empty and corrupt snapshot files

mod appends;
mod bootstrap;
mod filtering;
mod precedence;

pub use horizondb::prelude::*;
pub use horizondb::{decode_path_segment, Allowlist, DocumentStore};
pub use tempfile::TempDir;

/// Destination fixture: five records over four continents
pub const DESTINATIONS: &str = include_str!("fixtures/destinations.json");

/// Catalog over a copy of the destination fixture
pub async fn destinations_catalog() -> (TempDir, Catalog) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, DESTINATIONS).unwrap();
    let catalog = Catalog::builder()
        .path(&path)
        .destinations()
        .no_durability()
        .open()
        .await
        .unwrap();
    (dir, catalog)
}

/// Empty sightings catalog in a fresh directory
pub async fn sightings_catalog() -> (TempDir, Catalog) {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::builder()
        .path(dir.path().join("data").join("data.json"))
        .sightings()
        .no_durability()
        .open()
        .await
        .unwrap();
    (dir, catalog)
}

/// Names of the given records, in order
pub fn names(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| {
            r.get("name")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

/// A sighting draft as the front-end form submits it
pub fn sighting(location: &str, title: &str) -> Draft {
    Draft::new()
        .with("location", location)
        .with("title", title)
        .with("text", format!("{} spotted near {}", title, location))
}

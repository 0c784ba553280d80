//! Main entry point for horizondb.
//!
//! This module provides the `Catalog` struct: one document store paired
//! with the allowlist that governs how it may be filtered.

use crate::config::CatalogConfig;
use crate::error::Result;
use horizon_core::{Draft, IdentitySource, Record, Snapshot};
use horizon_query::{filter, Allowlist, Query};
use horizon_storage::{DocumentStore, StoreStats};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// A filterable, append-only collection of JSON documents.
///
/// Create a catalog using [`Catalog::open`] or [`Catalog::builder`], then
/// share it between request handlers.
///
/// # Example
///
/// ```ignore
/// use horizondb::prelude::*;
///
/// let catalog = Catalog::builder().path("data/data.json").destinations().open().await?;
///
/// // GET /api?country=kenya
/// let hits = catalog.query(Query::parse("country=kenya")).await?;
///
/// // GET /api/continent/Africa?is_open_to_public=true
/// let hits = catalog
///     .query_by_path("continent", "Africa", Query::parse("is_open_to_public=true"))
///     .await?;
///
/// // POST /api
/// let saved = catalog.append(Draft::new().with("title", "Leopard")).await?;
/// ```
pub struct Catalog {
    store: DocumentStore,
    allowlist: Allowlist,
}

impl Catalog {
    /// Open a catalog from configuration.
    pub async fn open(config: CatalogConfig) -> Result<Self> {
        Self::builder().config(config).open().await
    }

    /// Create a builder for catalog configuration.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// The underlying document store.
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Keys this catalog accepts as filters.
    pub fn allowlist(&self) -> &Allowlist {
        &self.allowlist
    }

    /// Get the snapshot file path.
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Append counters.
    pub fn stats(&self) -> StoreStats {
        self.store.stats()
    }

    /// First query key the allowlist does not recognize, if any.
    pub fn validate<'q>(&self, query: &'q Query) -> Option<&'q str> {
        self.allowlist.validate(query)
    }

    /// Every record, in insertion order.
    pub async fn list(&self) -> Snapshot {
        self.store.load().await
    }

    /// Records matching every filter in `query`.
    ///
    /// The query is validated before any data is read.
    pub async fn query(&self, query: Query) -> Result<Vec<Record>> {
        let validated = self.allowlist.check(query)?;
        let snapshot = self.store.load().await;
        let hits = filter(snapshot.records(), &validated);
        info!(filters = validated.len(), hits = hits.len(), total = snapshot.len(), "query");
        Ok(hits)
    }

    /// Records matching a path-derived filter plus `query`.
    ///
    /// `value` comes from a URL path segment such as `/api/continent/Africa`
    /// and must already be percent-decoded. It overrides any query-string
    /// value for the same key.
    pub async fn query_by_path(&self, key: &str, value: &str, query: Query) -> Result<Vec<Record>> {
        info!(key, value, "path filter");
        self.query(query.with_path_filter(key, value)).await
    }

    /// Commit a draft and return it with its assigned `uuid`.
    pub async fn append(&self, draft: Draft) -> Result<Record> {
        Ok(self.store.append(draft).await?)
    }

    /// Decode a JSON payload and append it.
    ///
    /// Payloads that are not a JSON object fail with `MalformedInput`
    /// before the store is touched.
    pub async fn append_json(&self, payload: &str) -> Result<Record> {
        let draft = Draft::from_json_str(payload)?;
        self.append(draft).await
    }

    /// Gracefully close the catalog.
    ///
    /// Waits for an in-flight append; afterwards appends fail with
    /// `Closed` while reads keep working.
    pub async fn close(&self) {
        self.store.close().await;
    }
}

/// Builder for catalog configuration.
///
/// # Example
///
/// ```ignore
/// let catalog = Catalog::builder()
///     .path("data/sightings.json")
///     .sightings()
///     .no_durability()
///     .open()
///     .await?;
/// ```
pub struct CatalogBuilder {
    config: CatalogConfig,
    allowlist: Option<Allowlist>,
    ids: Option<Arc<dyn IdentitySource>>,
}

impl CatalogBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: CatalogConfig::default(),
            allowlist: None,
            ids: None,
        }
    }

    /// Start from a loaded configuration.
    pub fn config(mut self, config: CatalogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the snapshot file path.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.config.store.path = path.as_ref().to_path_buf();
        self
    }

    /// Filter with the destination catalog allowlist (default).
    pub fn destinations(mut self) -> Self {
        self.allowlist = Some(Allowlist::destinations());
        self
    }

    /// Filter with the sightings allowlist.
    pub fn sightings(mut self) -> Self {
        self.allowlist = Some(Allowlist::sightings());
        self
    }

    /// Filter with a custom allowlist.
    pub fn allowlist(mut self, allowlist: Allowlist) -> Self {
        self.allowlist = Some(allowlist);
        self
    }

    /// Write single-line JSON.
    pub fn compact(mut self) -> Self {
        self.config.store.format = horizon_storage::SnapshotFormat::Compact;
        self
    }

    /// Skip fsync on persist.
    ///
    /// Appends are still atomic with respect to readers, but a crash may
    /// lose the most recent ones.
    pub fn no_durability(mut self) -> Self {
        self.config.store.durability = horizon_storage::DurabilityMode::None;
        self
    }

    /// Use a custom identity source.
    pub fn identity_source(mut self, ids: Arc<dyn IdentitySource>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Open the catalog.
    pub async fn open(self) -> Result<Catalog> {
        let allowlist = self.allowlist.unwrap_or_else(|| self.config.allowlist());
        let mut store = DocumentStore::builder().config(self.config.store);
        if let Some(ids) = self.ids {
            store = store.identity_source(ids);
        }
        let store = store.open().await?;
        Ok(Catalog { store, allowlist })
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

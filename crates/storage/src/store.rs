//! DocumentStore: append-only JSON document log over one snapshot file
//!
//! ## Design
//!
//! The store exclusively owns its snapshot file and is the only writer.
//! Every append runs the full read-modify-write cycle:
//!
//! ```text
//! 1. acquire writer lock
//! 2. assign identity to the draft
//! 3. load the current snapshot (strict: corruption aborts)
//! 4. push the committed record
//! 5. persist the whole snapshot (temp file + rename)
//! 6. release lock, return the record
//! ```
//!
//! ## Concurrency
//!
//! Appends are serialized through an async mutex held across steps 2-5, so
//! concurrent appends never lose each other's records. Reads take no lock:
//! since persistence renames a complete file into place, a reader sees the
//! snapshot from before or after an append, never a partial one.
//!
//! ## Failure
//!
//! If step 5 fails the append fails as a whole and the previous snapshot
//! stays on disk. There is no retry and no partially applied state.

use crate::config::{SnapshotFormat, StoreConfig};
use crate::durability::DurabilityMode;
use crate::file::{read_snapshot, write_snapshot};
use horizon_core::{Draft, Error, IdentitySource, RandomIds, Record, Result, Snapshot};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreState {
    Open,
    Closed,
}

/// Append counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Appends that reached disk
    pub appends_committed: u64,
    /// Appends that failed at any step
    pub appends_failed: u64,
}

#[derive(Debug, Default)]
struct Counters {
    committed: AtomicU64,
    failed: AtomicU64,
}

/// Single-snapshot JSON document store
///
/// Open one store per snapshot file and share it (e.g. in an `Arc`) between
/// all tasks that read or append.
pub struct DocumentStore {
    config: StoreConfig,
    ids: Arc<dyn IdentitySource>,
    /// Held for the whole load-mutate-persist cycle of an append
    writer: Mutex<()>,
    state: RwLock<StoreState>,
    counters: Counters,
}

impl std::fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStore")
            .field("config", &self.config)
            .field("state", &*self.state.read())
            .finish_non_exhaustive()
    }
}

impl DocumentStore {
    /// Open a store with the given configuration
    ///
    /// Creates missing parent directories. The snapshot file itself is not
    /// created until the first append.
    pub async fn open(config: StoreConfig) -> Result<Self> {
        Self::open_with_ids(config, Arc::new(RandomIds)).await
    }

    /// Open a store at `path` with default settings
    pub async fn open_path(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(StoreConfig::at(path)).await
    }

    /// Create a builder for store configuration
    pub fn builder() -> DocumentStoreBuilder {
        DocumentStoreBuilder::new()
    }

    async fn open_with_ids(config: StoreConfig, ids: Arc<dyn IdentitySource>) -> Result<Self> {
        if let Some(dir) = config.path.parent() {
            if !dir.as_os_str().is_empty() {
                tokio::fs::create_dir_all(dir).await?;
            }
        }

        let exists = tokio::fs::try_exists(&config.path).await.unwrap_or(false);
        info!(
            path = %config.path.display(),
            exists,
            format = ?config.format,
            durability = ?config.durability,
            "opened document store"
        );

        Ok(Self {
            config,
            ids,
            writer: Mutex::new(()),
            state: RwLock::new(StoreState::Open),
            counters: Counters::default(),
        })
    }

    /// Snapshot file path
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Effective configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Check if the store has been closed
    pub fn is_closed(&self) -> bool {
        *self.state.read() == StoreState::Closed
    }

    /// Append counters since open
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            appends_committed: self.counters.committed.load(Ordering::Relaxed),
            appends_failed: self.counters.failed.load(Ordering::Relaxed),
        }
    }

    /// Load the current snapshot, never failing
    ///
    /// A missing file is the normal first-run state and yields an empty
    /// snapshot. An unreadable or corrupt file also yields an empty
    /// snapshot here, with a warning; use [`try_load`](Self::try_load) to
    /// see that fault.
    pub async fn load(&self) -> Snapshot {
        match self.try_load().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(path = %self.config.path.display(), error = %e, "serving empty snapshot");
                Snapshot::new()
            }
        }
    }

    /// Load the current snapshot, reporting unreadable or corrupt files
    ///
    /// A missing or whitespace-only file is not an error: it is an empty
    /// store.
    pub async fn try_load(&self) -> Result<Snapshot> {
        let outcome = read_snapshot(&self.config.path).await?;
        if outcome.is_bootstrap() {
            debug!(path = %self.config.path.display(), "no snapshot yet, starting empty");
        }
        Ok(outcome.into_snapshot())
    }

    /// Assign identity to `draft`, append it and persist the snapshot
    ///
    /// Serialized against every other append on this store.
    ///
    /// # Errors
    ///
    /// - [`Error::Closed`] after [`close`](Self::close)
    /// - [`Error::Io`] / [`Error::Corruption`] if the current snapshot cannot
    ///   be read; nothing is written in that case
    /// - [`Error::Persistence`] if writing the new snapshot fails; the record
    ///   is not saved
    pub async fn append(&self, draft: Draft) -> Result<Record> {
        let _guard = self.writer.lock().await;
        if self.is_closed() {
            return Err(Error::Closed);
        }

        match self.append_locked(draft).await {
            Ok(record) => {
                self.counters.committed.fetch_add(1, Ordering::Relaxed);
                Ok(record)
            }
            Err(e) => {
                self.counters.failed.fetch_add(1, Ordering::Relaxed);
                warn!(path = %self.config.path.display(), error = %e, "append failed");
                Err(e)
            }
        }
    }

    async fn append_locked(&self, draft: Draft) -> Result<Record> {
        let id = self.ids.next_id();
        let record = Record::from_draft(draft, id);

        // Never start from a masked empty snapshot: that would overwrite data
        let mut snapshot = self.try_load().await?;
        snapshot.push(record.clone());

        let tag = id.to_string();
        write_snapshot(
            &self.config.path,
            &snapshot,
            self.config.format,
            self.config.durability,
            &tag,
        )
        .await?;

        info!(uuid = %id, records = snapshot.len(), "appended record");
        Ok(record)
    }

    /// Close the store
    ///
    /// Waits for an in-flight append to finish. Later appends fail with
    /// [`Error::Closed`]; reads keep working.
    pub async fn close(&self) {
        let _guard = self.writer.lock().await;
        let mut state = self.state.write();
        if *state == StoreState::Open {
            *state = StoreState::Closed;
            info!(path = %self.config.path.display(), "closed document store");
        }
    }
}

/// Builder for store configuration
///
/// # Example
///
/// ```ignore
/// let store = DocumentStore::builder()
///     .path("data/data.json")
///     .compact()
///     .no_durability()
///     .open()
///     .await?;
/// ```
pub struct DocumentStoreBuilder {
    config: StoreConfig,
    ids: Arc<dyn IdentitySource>,
}

impl DocumentStoreBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: StoreConfig::default(),
            ids: Arc::new(RandomIds),
        }
    }

    /// Start from an existing configuration
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the snapshot file path
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.config.path = path.as_ref().to_path_buf();
        self
    }

    /// Write two-space indented JSON (default)
    pub fn pretty(mut self) -> Self {
        self.config.format = SnapshotFormat::Pretty;
        self
    }

    /// Write single-line JSON
    pub fn compact(mut self) -> Self {
        self.config.format = SnapshotFormat::Compact;
        self
    }

    /// Skip fsync on persist
    pub fn no_durability(mut self) -> Self {
        self.config.durability = DurabilityMode::None;
        self
    }

    /// fsync on every persist (default)
    pub fn strict(mut self) -> Self {
        self.config.durability = DurabilityMode::Strict;
        self
    }

    /// Use a custom identity source
    pub fn identity_source(mut self, ids: Arc<dyn IdentitySource>) -> Self {
        self.ids = ids;
        self
    }

    /// Open the store
    pub async fn open(self) -> Result<DocumentStore> {
        DocumentStore::open_with_ids(self.config, self.ids).await
    }
}

impl Default for DocumentStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Public types for the horizondb API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Records and identity
pub use horizon_core::{Draft, FieldRef, Record, RecordId, Snapshot};
pub use horizon_core::{IdentitySource, RandomIds};

// Query layer
pub use horizon_query::{
    decode_path_segment, filter, Allowlist, Predicate, Query, ValidatedQuery,
};

// Store configuration
pub use horizon_storage::{
    DocumentStore, DocumentStoreBuilder, DurabilityMode, SnapshotFormat, StoreConfig, StoreStats,
};

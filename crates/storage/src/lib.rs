//! Storage layer for horizondb
//!
//! This crate implements the single-snapshot document store:
//! - DocumentStore: serialized appends, lock-free reads
//! - Snapshot file codec with atomic replace-on-write
//! - StoreConfig: builder- or TOML-driven configuration
//! - DurabilityMode: fsync policy for persists

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod durability;
mod file;
pub mod store;

pub use config::{ConfigError, SnapshotFormat, StoreConfig, DEFAULT_SNAPSHOT_PATH};
pub use durability::DurabilityMode;
pub use store::{DocumentStore, DocumentStoreBuilder, StoreStats};

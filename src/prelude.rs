//! Convenient imports for horizondb.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```ignore
//! use horizondb::prelude::*;
//!
//! let catalog = Catalog::open(CatalogConfig::default()).await?;
//! let hits = catalog.query(Query::parse("continent=asia")).await?;
//! ```

// Main entry point
pub use crate::catalog::{Catalog, CatalogBuilder};
pub use crate::config::{CatalogConfig, CatalogKind};

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use crate::types::{Draft, Query, Record, RecordId, Snapshot};

// Re-export serde_json for convenience
pub use serde_json::json;

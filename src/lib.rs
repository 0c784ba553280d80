//! # horizondb
//!
//! Schemaless JSON document store with allowlisted query filtering.
//!
//! horizondb keeps an ordered collection of JSON records in a single
//! snapshot file. Records are appended (never updated or deleted) and read
//! back through filters built from URL-style query parameters.
//!
//! ## Quick Start
//!
//! ```ignore
//! use horizondb::prelude::*;
//!
//! let catalog = Catalog::builder().path("data/data.json").open().await?;
//!
//! // Append a record; the store assigns its uuid
//! let saved = catalog.append(Draft::new().with("name", "Maasai Mara")).await?;
//!
//! // Filter: case-insensitive exact match on top-level strings
//! let kenya = catalog.query(Query::parse("country=kenya")).await?;
//!
//! // Filter: substring match inside details[*].fun_fact
//! let elephants = catalog.query(Query::parse("fun_fact=elephant")).await?;
//!
//! catalog.close().await;
//! ```
//!
//! ## Crates
//!
//! - `horizon-core` - records, snapshots, identities, core errors
//! - `horizon-query` - query parsing, allowlists, filter engine
//! - `horizon-storage` - the snapshot-backed document store

#![warn(missing_docs)]

mod catalog;
mod config;
mod error;
mod types;

pub mod prelude;

// Re-export main entry points
pub use catalog::{Catalog, CatalogBuilder};
pub use config::{CatalogConfig, CatalogKind};
pub use error::{status_text, Error, Result};

// Re-export types
pub use types::*;

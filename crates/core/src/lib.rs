//! Core types for horizondb
//!
//! This crate defines the data model shared by the query engine and the
//! document store:
//! - [`RecordId`] and [`IdentitySource`]: identity assignment for new records
//! - [`Record`], [`Draft`] and [`FieldRef`]: schemaless JSON documents
//! - [`Snapshot`]: the ordered collection persisted as one JSON array
//! - [`Error`]: the error taxonomy used across the workspace

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;
pub mod snapshot;
pub mod types;

pub use error::{Error, Result};
pub use record::{Draft, FieldRef, Record, DETAILS_FIELD, UUID_FIELD};
pub use snapshot::{ParseError, Snapshot};
pub use types::{IdentitySource, RandomIds, RecordId};

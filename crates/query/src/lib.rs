//! Query layer for horizondb
//!
//! Turns URL-style filter parameters into record predicates:
//! - [`Query`]: ordered key/value parameters, with path-filter precedence
//! - [`Allowlist`]: fixed set of filterable field names and validation
//! - [`Predicate`] and [`filter`]: compiled conjunction of per-key tests
//!
//! Everything in this crate is pure. Validation and filtering never touch
//! storage and never fail on record shape.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod allowlist;
pub mod filter;
pub mod query;

pub use allowlist::{Allowlist, FilterKey, ValidatedQuery, DESTINATION_KEYS, SIGHTING_KEYS};
pub use filter::{filter, Predicate, NESTED_KEYS};
pub use query::{decode_path_segment, Query};

//! Filter-key allowlists and query validation
//!
//! Only keys admitted by an [`Allowlist`] may ever be used to read a record
//! field. A [`ValidatedQuery`] is the proof that this check happened; the
//! filter engine accepts nothing else.

use crate::query::Query;
use horizon_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Filter keys recognized by the destinations catalog
pub const DESTINATION_KEYS: &[&str] = &[
    "name",
    "location",
    "country",
    "continent",
    "is_open_to_public",
    "uuid",
    "fun_fact",
    "description",
];

/// Filter keys recognized by the sightings log
pub const SIGHTING_KEYS: &[&str] = &["uuid", "location", "title", "text", "timeStamp"];

/// Fixed set of field names permitted as filter keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Allowlist {
    keys: Vec<String>,
}

impl Allowlist {
    /// Build an allowlist from field names
    ///
    /// Duplicates are dropped; the first occurrence keeps its position.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for key in keys {
            let key = key.into();
            if !unique.contains(&key) {
                unique.push(key);
            }
        }
        Allowlist { keys: unique }
    }

    /// Allowlist for the destinations catalog
    pub fn destinations() -> Self {
        Self::new(DESTINATION_KEYS.iter().copied())
    }

    /// Allowlist for the sightings log
    pub fn sightings() -> Self {
        Self::new(SIGHTING_KEYS.iter().copied())
    }

    /// Check membership of one key
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Recognized keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// First query key, in query order, that is not allowlisted
    ///
    /// Returns `None` when every key is recognized. Values are not inspected.
    pub fn validate<'q>(&self, query: &'q Query) -> Option<&'q str> {
        query.keys().find(|key| !self.contains(key))
    }

    /// Validate a query and take it into the form the filter engine accepts
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFilterKey`] carrying the first unrecognized key.
    pub fn check(&self, query: Query) -> Result<ValidatedQuery> {
        if let Some(key) = self.validate(&query) {
            debug!(key, "rejected filter key");
            return Err(Error::invalid_filter_key(key));
        }
        let entries = query
            .iter()
            .map(|(k, v)| (FilterKey(k.to_string()), v.to_string()))
            .collect();
        Ok(ValidatedQuery { entries })
    }
}

/// A field name that passed allowlist validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterKey(String);

impl FilterKey {
    /// The field name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Query whose keys have all been admitted by an allowlist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedQuery {
    entries: Vec<(FilterKey, String)>,
}

impl ValidatedQuery {
    /// The query with no filters; matches every record
    pub fn empty() -> Self {
        Self::default()
    }

    /// Entries in query order
    pub fn iter(&self) -> impl Iterator<Item = (&FilterKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Number of filters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no filters
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

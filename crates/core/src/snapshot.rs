//! Snapshot: the full ordered collection of records
//!
//! A snapshot is persisted as a single JSON array of objects. Insertion
//! order is the only ordering guarantee; there is no secondary index.

use crate::error::Result;
use crate::record::{json_type_name, Record};
use serde_json::Value;
use thiserror::Error;

/// Snapshot bytes did not hold a JSON array of objects
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ParseError(String);

/// Ordered sequence of records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    records: Vec<Record>,
}

impl Snapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a persisted snapshot
    ///
    /// The document must be one top-level array whose elements are all
    /// objects. Records may have heterogeneous field sets.
    pub fn parse(bytes: &[u8]) -> std::result::Result<Self, ParseError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| ParseError(e.to_string()))?;
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(ParseError(format!(
                    "expected a top-level array, found {}",
                    json_type_name(&other)
                )))
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match item {
                Value::Object(fields) => records.push(Record::from_map(fields)),
                other => {
                    return Err(ParseError(format!(
                        "element {} is {}, expected object",
                        index,
                        json_type_name(&other)
                    )))
                }
            }
        }
        Ok(Snapshot { records })
    }

    /// Encode as pretty-printed JSON (two-space indentation)
    pub fn to_json_pretty(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&self.records)?)
    }

    /// Encode as compact JSON
    pub fn to_json_compact(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.records)?)
    }

    /// Append a record at the end
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the snapshot has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Most recently appended record
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Look up a record by identity
    pub fn find(&self, uuid: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.uuid() == Some(uuid))
    }

    /// Consume into the record vector
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl From<Vec<Record>> for Snapshot {
    fn from(records: Vec<Record>) -> Self {
        Snapshot { records }
    }
}

impl FromIterator<Record> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Snapshot {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Snapshot {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

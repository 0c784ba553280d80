//! Schemaless JSON records
//!
//! A [`Record`] is a JSON object with dynamically named fields. The only
//! field with fixed meaning is `uuid`, assigned once when a [`Draft`] is
//! committed. Field order is preserved exactly as loaded or drafted.

use crate::error::{Error, Result};
use crate::types::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the identity field on committed records
pub const UUID_FIELD: &str = "uuid";

/// Name of the nested sequence of sub-documents
pub const DETAILS_FIELD: &str = "details";

/// Tagged view of a top-level field
///
/// Reading a field never fails: a missing field is [`FieldRef::Absent`] and
/// any JSON type other than boolean or string is [`FieldRef::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef<'a> {
    /// Field is not present
    Absent,
    /// Boolean field
    Bool(bool),
    /// String field
    Str(&'a str),
    /// Number, null, array or object
    Other,
}

impl<'a> FieldRef<'a> {
    fn of(value: Option<&'a Value>) -> Self {
        match value {
            None => FieldRef::Absent,
            Some(Value::Bool(b)) => FieldRef::Bool(*b),
            Some(Value::String(s)) => FieldRef::Str(s),
            Some(_) => FieldRef::Other,
        }
    }

    /// Check whether the field is present
    pub fn is_present(&self) -> bool {
        !matches!(self, FieldRef::Absent)
    }
}

/// A committed document
///
/// Records are immutable once appended; there is no API to change a field
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Commit a draft under the given identity
    ///
    /// A `uuid` already present on the draft is overwritten in place; otherwise
    /// the field is added after the drafted fields.
    pub fn from_draft(draft: Draft, id: RecordId) -> Self {
        let mut fields = draft.0;
        fields.insert(UUID_FIELD.to_string(), Value::String(id.to_string()));
        Record(fields)
    }

    /// Wrap an already-committed JSON object, e.g. one read back from disk
    pub(crate) fn from_map(fields: Map<String, Value>) -> Self {
        Record(fields)
    }

    /// The record's identity, if it carries a string `uuid`
    pub fn uuid(&self) -> Option<&str> {
        self.0.get(UUID_FIELD).and_then(Value::as_str)
    }

    /// Read a top-level field as a tagged value
    pub fn field(&self, key: &str) -> FieldRef<'_> {
        FieldRef::of(self.0.get(key))
    }

    /// Raw JSON value of a top-level field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Iterate the object entries of the `details` sequence
    ///
    /// Yields nothing when `details` is missing or not an array; entries that
    /// are not objects are skipped.
    pub fn details(&self) -> impl Iterator<Item = &Map<String, Value>> {
        self.0
            .get(DETAILS_FIELD)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
    }

    /// Field names in stored order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of top-level fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert into a JSON value
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        record.into_value()
    }
}

/// A record before identity assignment
///
/// Drafts arrive already decoded and sanitized by the caller. The only
/// structural requirement is that the payload is a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Draft(Map<String, Value>);

impl Draft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a draft from a decoded JSON value
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if the value is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Draft(fields)),
            other => Err(Error::MalformedInput(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Decode a draft from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| Error::MalformedInput(format!("invalid JSON format: {}", e)))?;
        Self::from_value(value)
    }

    /// Set a field, returning the draft for chaining
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set a field
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Raw JSON value of a field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl TryFrom<Value> for Draft {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Draft::from_value(value)
    }
}

/// JSON type name for diagnostics
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

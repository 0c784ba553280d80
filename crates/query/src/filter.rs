//! Filter engine: compiles validated queries into record predicates
//!
//! ## Matching rules
//!
//! Each query entry becomes one clause; a record matches when every clause
//! holds. An empty query matches everything.
//!
//! - Nested keys (`fun_fact`, `description`) look inside the `details`
//!   sequence: some entry's same-named field must contain the value,
//!   ignoring case.
//! - Any other key reads the top-level field. Booleans compare against the
//!   literal `"true"`; strings compare equal ignoring case. Missing fields
//!   and other JSON types never match.
//!
//! Nothing here can fail. Records are schemaless, so a shape mismatch is a
//! non-match rather than an error.

use crate::allowlist::{FilterKey, ValidatedQuery};
use horizon_core::{FieldRef, Record};
use serde_json::Value;

/// Keys matched against entries of the `details` sequence
pub const NESTED_KEYS: &[&str] = &["fun_fact", "description"];

#[derive(Debug, Clone)]
enum Clause {
    /// Case-insensitive substring match inside `details[*].<key>`
    Nested { key: FilterKey, needle: String },
    /// Top-level field match; the field's runtime type picks the comparison
    Field {
        key: FilterKey,
        folded: String,
        as_bool: bool,
    },
}

impl Clause {
    fn compile(key: &FilterKey, value: &str) -> Self {
        if NESTED_KEYS.contains(&key.as_str()) {
            Clause::Nested {
                key: key.clone(),
                needle: value.to_lowercase(),
            }
        } else {
            Clause::Field {
                key: key.clone(),
                folded: value.to_lowercase(),
                as_bool: value == "true",
            }
        }
    }

    fn matches(&self, record: &Record) -> bool {
        match self {
            Clause::Nested { key, needle } => record.details().any(|entry| {
                let text = entry.get(key.as_str()).and_then(Value::as_str).unwrap_or("");
                text.to_lowercase().contains(needle.as_str())
            }),
            Clause::Field {
                key,
                folded,
                as_bool,
            } => match read_field(record, key) {
                FieldRef::Bool(b) => b == *as_bool,
                FieldRef::Str(s) => s.to_lowercase() == *folded,
                FieldRef::Absent | FieldRef::Other => false,
            },
        }
    }
}

/// The only path from a filter to a record field: keys must be allowlisted
fn read_field<'r>(record: &'r Record, key: &FilterKey) -> FieldRef<'r> {
    record.field(key.as_str())
}

/// Conjunction of per-key tests over a single record
#[derive(Debug, Clone, Default)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    /// Predicate that accepts every record
    pub fn always() -> Self {
        Self::default()
    }

    /// Compile one clause per query entry
    pub fn compile(query: &ValidatedQuery) -> Self {
        let clauses = query.iter().map(|(k, v)| Clause::compile(k, v)).collect();
        Predicate { clauses }
    }

    /// Test a single record
    pub fn matches(&self, record: &Record) -> bool {
        self.clauses.iter().all(|clause| clause.matches(record))
    }

    /// Check if this predicate accepts everything
    pub fn is_always(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Number of clauses
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Check if there are no clauses
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Borrow matching records in their original order
    pub fn select<'a, I>(&'a self, records: I) -> impl Iterator<Item = &'a Record> + 'a
    where
        I: IntoIterator<Item = &'a Record>,
        I::IntoIter: 'a,
    {
        records.into_iter().filter(move |r| self.matches(r))
    }

    /// Copy matching records in their original order
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        self.select(records).cloned().collect()
    }
}

/// Filter records by a validated query
///
/// Order-preserving; the input is left untouched.
pub fn filter(records: &[Record], query: &ValidatedQuery) -> Vec<Record> {
    Predicate::compile(query).apply(records)
}

//! Identity types
//!
//! This module defines how records are identified:
//! - [`RecordId`]: 128-bit random identifier, rendered in canonical UUID form
//! - [`IdentitySource`]: where the document store obtains new identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a committed record
///
/// RecordId is assigned exactly once, when a draft is appended to a store.
/// It is persisted as the record's `uuid` string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Create a new random RecordId using UUID v4
    ///
    /// # Examples
    ///
    /// ```
    /// use horizon_core::RecordId;
    ///
    /// let id1 = RecordId::new();
    /// let id2 = RecordId::new();
    /// assert_ne!(id1, id2);
    /// ```
    pub fn new() -> Self {
        RecordId(Uuid::new_v4())
    }

    /// Create RecordId from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        RecordId(Uuid::from_bytes(bytes))
    }

    /// Parse a RecordId from its textual form
    ///
    /// Returns `None` if the string is not a valid UUID.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(RecordId)
    }

    /// Get raw bytes representation
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Lowercase hyphenated form, e.g. 67e55044-10b1-426f-9247-bb680e5fe0c8
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Source of identifiers for newly appended records
///
/// Implementations must never hand out the same identifier twice over the
/// lifetime of a store. Generation is infallible and has no side effects
/// visible to the store.
pub trait IdentitySource: Send + Sync {
    /// Produce the next identifier
    fn next_id(&self) -> RecordId;
}

/// Default identity source: random UUID v4 per call
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdentitySource for RandomIds {
    fn next_id(&self) -> RecordId {
        RecordId::new()
    }
}

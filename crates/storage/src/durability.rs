//! Durability mode for snapshot writes.
//!
//! Defines how hard a persist step pushes the new snapshot to disk before
//! an append reports success.

use serde::{Deserialize, Serialize};

/// Durability mode for snapshot writes.
///
/// Every persist writes a temporary sibling file and renames it over the
/// snapshot, so readers never observe a torn file in either mode. The mode
/// only decides whether the bytes are fsynced first.
///
/// # Mode Comparison
///
/// | Mode | fsync | Use Case |
/// |------|-------|----------|
/// | None | never | Tests, scratch data |
/// | Strict | file + directory | Default; survives power loss |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurabilityMode {
    /// No fsync; the OS flushes when it likes.
    ///
    /// A crash shortly after an append may lose it.
    None,

    /// fsync the new snapshot, then its directory after the rename.
    #[default]
    Strict,
}

impl DurabilityMode {
    /// Check if this mode requires fsync on every persist.
    pub fn requires_fsync(&self) -> bool {
        matches!(self, DurabilityMode::Strict)
    }

    /// Human-readable description of the mode.
    pub fn description(&self) -> &'static str {
        match self {
            DurabilityMode::None => "No fsync (fastest, recent appends may be lost on crash)",
            DurabilityMode::Strict => "fsync on every append (safest, slowest)",
        }
    }
}

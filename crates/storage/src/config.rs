//! Store configuration
//!
//! A [`StoreConfig`] can be assembled through the builder or read from a
//! TOML table:
//!
//! ```toml
//! path = "data/data.json"
//! format = "pretty"
//! durability = "strict"
//! ```

use crate::durability::DurabilityMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default snapshot location, relative to the working directory
pub const DEFAULT_SNAPSHOT_PATH: &str = "data/data.json";

/// How the snapshot array is laid out on disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotFormat {
    /// Two-space indented JSON
    #[default]
    Pretty,
    /// Single-line JSON
    Compact,
}

/// Configuration for a [`DocumentStore`](crate::DocumentStore)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Snapshot file path
    pub path: PathBuf,
    /// On-disk layout
    pub format: SnapshotFormat,
    /// fsync policy for persists
    pub durability: DurabilityMode,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            format: SnapshotFormat::default(),
            durability: DurabilityMode::default(),
        }
    }
}

/// Failure to read a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        /// Config path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl StoreConfig {
    /// Configuration for a snapshot at `path` with default settings
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Parse from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

//! Catalog configuration.
//!
//! Read from TOML, e.g.:
//!
//! ```toml
//! kind = "sightings"
//!
//! [store]
//! path = "data/data.json"
//! durability = "strict"
//! ```

use crate::error::Result;
use horizon_query::Allowlist;
use horizon_storage::StoreConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which preset allowlist a catalog filters with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// Read-mostly destination catalog
    #[default]
    Destinations,
    /// Append-only sightings log
    Sightings,
}

/// Configuration for a [`Catalog`](crate::Catalog)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Preset allowlist
    pub kind: CatalogKind,
    /// Explicit filter keys; overrides the preset when set
    pub filters: Option<Vec<String>>,
    /// Snapshot store settings
    pub store: StoreConfig,
}

impl CatalogConfig {
    /// Parse from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Read from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// The allowlist this configuration selects
    pub fn allowlist(&self) -> Allowlist {
        match (&self.filters, self.kind) {
            (Some(keys), _) => Allowlist::new(keys.iter().cloned()),
            (None, CatalogKind::Destinations) => Allowlist::destinations(),
            (None, CatalogKind::Sightings) => Allowlist::sightings(),
        }
    }
}

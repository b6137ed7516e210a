//! TOML catalog files
//!
//! ```toml
//! [[entry]]
//! key = "array"
//! label = "MDN: Array"
//! url = "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array"
//! description = "Complete reference for JavaScript arrays"
//! ```

use crate::{CatalogError, ReferenceCatalog};
use docpin_domain::ReferenceEntry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// On-disk shape of a catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Entries in declaration order
    #[serde(rename = "entry", default)]
    pub entries: Vec<EntryRecord>,
}

/// On-disk shape of one entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Topic key
    pub key: String,
    /// Link label
    pub label: String,
    /// Target URL
    pub url: String,
    /// Short description
    #[serde(default)]
    pub description: String,
}

impl From<EntryRecord> for ReferenceEntry {
    fn from(record: EntryRecord) -> Self {
        ReferenceEntry::new(record.key, record.label, record.url, record.description)
    }
}

impl From<&ReferenceEntry> for EntryRecord {
    fn from(entry: &ReferenceEntry) -> Self {
        Self {
            key: entry.key.clone(),
            label: entry.label.clone(),
            url: entry.url.clone(),
            description: entry.description.clone(),
        }
    }
}

impl ReferenceCatalog {
    /// Parse a catalog from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(toml_str)?;
        Self::new(file.entries.into_iter().map(ReferenceEntry::from))
    }

    /// Load a catalog from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_toml(&contents)?;
        debug!("Loaded {} catalog entries from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Serialize the catalog to a TOML string
    pub fn to_toml(&self) -> Result<String, CatalogError> {
        let file = CatalogFile {
            entries: self.iter().map(EntryRecord::from).collect(),
        };
        toml::to_string_pretty(&file)
            .map_err(|e| CatalogError::Parse(format!("Failed to serialize catalog: {}", e)))
    }
}

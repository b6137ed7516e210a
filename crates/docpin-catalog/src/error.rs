//! Catalog error types

use thiserror::Error;

/// Errors that can occur while building or loading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two entries share a topic key
    #[error("Duplicate topic key: {0}")]
    DuplicateKey(String),

    /// An entry is missing a required field
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Catalog file could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Catalog file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

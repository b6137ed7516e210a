//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog could not be built
    #[error("Catalog error: {0}")]
    Catalog(#[from] docpin_catalog::CatalogError),

    /// Rules or classifier settings were rejected
    #[error("Classifier error: {0}")]
    Classifier(#[from] docpin_classifier::ClassifierError),

    /// Content file could not be read or written
    #[error("Store error: {0}")]
    Store(#[from] docpin_store::StoreError),

    /// Batch tagging failed
    #[error("Enricher error: {0}")]
    Enricher(#[from] docpin_enricher::EnricherError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested item or entry does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

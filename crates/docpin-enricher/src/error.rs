//! Error types for Enricher operations

use thiserror::Error;

/// Errors that can occur during an enrichment run
#[derive(Error, Debug)]
pub enum EnricherError {
    /// Storage layer error
    #[error("Storage error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

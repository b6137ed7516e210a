//! Classifier error types

use thiserror::Error;

/// Errors that can occur while configuring the classifier
///
/// Classification itself never fails; these only surface at startup.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rule or config file could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Rule or config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for ClassifierError {
    fn from(e: toml::de::Error) -> Self {
        ClassifierError::Parse(e.to_string())
    }
}

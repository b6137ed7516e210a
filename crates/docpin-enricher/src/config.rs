//! Configuration for enrichment runs

use crate::EnricherError;
use serde::{Deserialize, Serialize};

/// Configuration for the Enricher
///
/// # Examples
///
/// ```
/// use docpin_enricher::EnricherConfig;
///
/// // Default: write results, leave already-tagged items alone
/// let config = EnricherConfig::default();
/// assert!(!config.dry_run);
/// assert!(!config.force);
///
/// // Preview: classify everything, write nothing
/// let config = EnricherConfig::preview();
/// assert!(config.dry_run);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnricherConfig {
    /// Dry-run mode: log what would be written without touching the store
    /// Default: false
    #[serde(default)]
    pub dry_run: bool,

    /// Reclassify items that already carry references
    /// Default: false (runs are idempotent)
    #[serde(default)]
    pub force: bool,

    /// Leave the references slot untouched when classification yields nothing
    /// Default: false (the empty list is written verbatim)
    #[serde(default)]
    pub skip_empty_results: bool,
}

impl Default for EnricherConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            force: false,
            skip_empty_results: false,
        }
    }
}

impl EnricherConfig {
    /// Classify and report without writing
    pub fn preview() -> Self {
        Self {
            dry_run: true,
            ..Self::default()
        }
    }

    /// Reclassify every item, overwriting existing references
    pub fn retag_all() -> Self {
        Self {
            force: true,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, EnricherError> {
        toml::from_str(toml_str).map_err(|e| EnricherError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, EnricherError> {
        toml::to_string_pretty(self)
            .map_err(|e| EnricherError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EnricherConfig::default();
        assert!(!config.dry_run);
        assert!(!config.force);
        assert!(!config.skip_empty_results);
    }

    #[test]
    fn test_presets() {
        assert!(EnricherConfig::preview().dry_run);
        assert!(!EnricherConfig::preview().force);
        assert!(EnricherConfig::retag_all().force);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = EnricherConfig::from_toml("").unwrap();
        assert_eq!(config, EnricherConfig::default());
    }

    #[test]
    fn test_bad_toml() {
        assert!(EnricherConfig::from_toml("dry_run = \"maybe\"").is_err());
    }
}

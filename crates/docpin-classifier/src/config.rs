//! Classifier configuration

use crate::ClassifierError;
use serde::{Deserialize, Serialize};

/// Configuration for the classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Maximum number of references returned per item
    pub max_references: usize,

    /// Levels at or above this count as advanced for the script fallback
    pub advanced_level_threshold: u8,

    /// Generic entry always offered first by the script fallback
    pub script_baseline_key: String,

    /// Script fallback entry for low or missing levels
    pub script_fundamentals_key: String,

    /// Script fallback entry for advanced levels
    pub script_advanced_key: String,

    /// Markup fallback entry
    pub markup_baseline_key: String,

    /// Styling fallback entry
    pub styling_baseline_key: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            max_references: 3,
            advanced_level_threshold: 3,
            script_baseline_key: "javascript-guide".to_string(),
            script_fundamentals_key: "js-first-steps".to_string(),
            script_advanced_key: "js-data-structures".to_string(),
            markup_baseline_key: "html-basics".to_string(),
            styling_baseline_key: "css-basics".to_string(),
        }
    }
}

impl ClassifierConfig {
    /// Single most relevant reference per item
    pub fn compact() -> Self {
        Self {
            max_references: 1,
            ..Self::default()
        }
    }

    /// Up to five references per item
    pub fn generous() -> Self {
        Self {
            max_references: 5,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_references == 0 {
            return Err("max_references must be greater than 0".to_string());
        }

        let keys = [
            ("script_baseline_key", &self.script_baseline_key),
            ("script_fundamentals_key", &self.script_fundamentals_key),
            ("script_advanced_key", &self.script_advanced_key),
            ("markup_baseline_key", &self.markup_baseline_key),
            ("styling_baseline_key", &self.styling_baseline_key),
        ];
        for (name, key) in keys {
            if key.trim().is_empty() {
                return Err(format!("{} must not be empty", name));
            }
        }

        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ClassifierError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ClassifierError> {
        toml::to_string_pretty(self)
            .map_err(|e| ClassifierError::Parse(format!("Failed to serialize to TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClassifierConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_references, 3);
    }

    #[test]
    fn test_presets() {
        assert_eq!(ClassifierConfig::compact().max_references, 1);
        assert_eq!(ClassifierConfig::generous().max_references, 5);
        assert!(ClassifierConfig::generous().validate().is_ok());
    }

    #[test]
    fn test_zero_cap_is_invalid() {
        let config = ClassifierConfig {
            max_references: 0,
            ..ClassifierConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_fallback_key_is_invalid() {
        let config = ClassifierConfig {
            markup_baseline_key: " ".to_string(),
            ..ClassifierConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("markup_baseline_key"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ClassifierConfig::from_toml("max_references = 2").unwrap();
        assert_eq!(config.max_references, 2);
        assert_eq!(config.script_baseline_key, "javascript-guide");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ClassifierConfig::generous();
        let parsed = ClassifierConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }
}

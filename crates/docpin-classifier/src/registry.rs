//! Kind → rule battery registry
//!
//! Rule files use one `[[battery]]` table per kind:
//!
//! ```toml
//! [[battery]]
//! kind = "html"
//!
//! [[battery.rule]]
//! topic = "html-elements"
//! when = "always"
//!
//! [[battery.rule]]
//! topic = "html-table"
//! when = { contains = "table" }
//! ```

use crate::{ClassifierError, Predicate, Rule, RuleBattery};
use docpin_domain::ContentKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Registry of rule batteries, one per content kind
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    batteries: BTreeMap<ContentKind, RuleBattery>,
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a battery (builder style), replacing any previous one
    pub fn with_battery(mut self, kind: ContentKind, battery: RuleBattery) -> Self {
        self.register(kind, battery);
        self
    }

    /// Register a battery, replacing any previous one for the kind
    pub fn register(&mut self, kind: ContentKind, battery: RuleBattery) -> Option<RuleBattery> {
        self.batteries.insert(kind, battery)
    }

    /// Battery for a kind, if registered
    pub fn battery(&self, kind: &ContentKind) -> Option<&RuleBattery> {
        self.batteries.get(kind)
    }

    /// All batteries ordered by kind
    pub fn iter(&self) -> impl Iterator<Item = (&ContentKind, &RuleBattery)> {
        self.batteries.iter()
    }

    /// Number of registered kinds
    pub fn len(&self) -> usize {
        self.batteries.len()
    }

    /// Whether no battery is registered
    pub fn is_empty(&self) -> bool {
        self.batteries.is_empty()
    }

    /// Parse a registry from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ClassifierError> {
        let file: RulesFile = toml::from_str(toml_str)?;
        let mut registry = Self::new();

        for record in file.batteries {
            let kind = ContentKind::parse(&record.kind);
            let mut battery = RuleBattery::new();
            for rule in record.rules {
                if rule.topic.trim().is_empty() {
                    return Err(ClassifierError::Config(format!(
                        "rule in battery '{}' has an empty topic",
                        kind
                    )));
                }
                battery.push(Rule::new(rule.when, rule.topic));
            }

            if registry.register(kind.clone(), battery).is_some() {
                return Err(ClassifierError::Config(format!(
                    "battery for kind '{}' is declared twice",
                    kind
                )));
            }
        }

        Ok(registry)
    }

    /// Load a registry from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Serialize the registry to a TOML string
    pub fn to_toml(&self) -> Result<String, ClassifierError> {
        toml::to_string_pretty(&RulesFile::from(self))
            .map_err(|e| ClassifierError::Parse(format!("Failed to serialize rules: {}", e)))
    }
}

impl From<&RuleRegistry> for RulesFile {
    fn from(registry: &RuleRegistry) -> Self {
        RulesFile {
            batteries: registry
                .iter()
                .map(|(kind, battery)| BatteryRecord {
                    kind: kind.as_str().to_string(),
                    rules: battery
                        .iter()
                        .map(|rule| RuleRecord {
                            topic: rule.topic.clone(),
                            when: rule.predicate.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// On-disk shape of a rule file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesFile {
    /// Batteries in file order
    #[serde(rename = "battery", default)]
    pub batteries: Vec<BatteryRecord>,
}

/// On-disk shape of one battery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryRecord {
    /// Content kind name
    pub kind: String,

    /// Rules in declaration order
    #[serde(rename = "rule", default)]
    pub rules: Vec<RuleRecord>,
}

/// On-disk shape of one rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleRecord {
    /// Catalog topic key
    pub topic: String,

    /// Firing condition
    pub when: Predicate,
}

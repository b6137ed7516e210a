//! Conversions between raw JSON records and domain types
//!
//! Field mapping:
//!
//! | JSON | ContentItem |
//! |------|-------------|
//! | `id` | `id` (numbers are stringified) |
//! | `type` | `kind` (missing means script) |
//! | `title` | `title` |
//! | `description` | `summary` |
//! | `instructions` | `body` |
//! | `tags` | `tags` (non-string entries skipped) |
//! | `difficulty` or `level` | `level` (number or numeric string) |
//! | `resources` | `references` |

use docpin_domain::{ContentItem, ContentKind, ReferenceEntry};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Serialized shape of one reference; the catalog key is not exposed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    /// Link label
    #[serde(default)]
    pub label: String,
    /// Target URL
    pub url: String,
    /// Short description
    #[serde(default)]
    pub description: String,
}

impl From<&ReferenceEntry> for ReferenceRecord {
    fn from(entry: &ReferenceEntry) -> Self {
        Self {
            label: entry.label.clone(),
            url: entry.url.clone(),
            description: entry.description.clone(),
        }
    }
}

impl From<ReferenceRecord> for ReferenceEntry {
    /// Stored references carry no topic key
    fn from(record: ReferenceRecord) -> Self {
        ReferenceEntry::new(String::new(), record.label, record.url, record.description)
    }
}

/// Convert one raw record into a content item
///
/// `fallback_id` is used when the record has no usable `id`.
pub fn item_from_record(record: &Map<String, Value>, fallback_id: &str) -> ContentItem {
    let id = match record.get("id") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => fallback_id.to_string(),
    };

    let kind = match record.get("type") {
        Some(Value::String(s)) => ContentKind::parse(s),
        _ => ContentKind::default(),
    };

    let level = level_of(record.get("difficulty")).or_else(|| level_of(record.get("level")));

    ContentItem {
        id,
        kind,
        title: text_of(record.get("title")),
        summary: text_of(record.get("description")),
        body: text_of(record.get("instructions")),
        tags: tags_of(record.get("tags")),
        level,
        references: references_of(record.get("resources")),
    }
}

/// Serialize references into the `resources` JSON value
pub fn references_to_value(references: &[ReferenceEntry]) -> Value {
    Value::Array(
        references
            .iter()
            .map(ReferenceRecord::from)
            .filter_map(|record| serde_json::to_value(record).ok())
            .collect(),
    )
}

fn text_of(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn tags_of(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

fn level_of(value: Option<&Value>) -> Option<u8> {
    match value? {
        Value::Number(n) => n.as_u64().and_then(|v| u8::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn references_of(value: Option<&Value>) -> Vec<ReferenceEntry> {
    match value {
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(|v| serde_json::from_value::<ReferenceRecord>(v.clone()).ok())
            .map(ReferenceEntry::from)
            .collect(),
        _ => Vec::new(),
    }
}

//! Metrics collection for enrichment runs

use docpin_domain::ContentKind;
use std::collections::BTreeMap;

/// Metrics collected during an enrichment run
///
/// Tracks items tagged per kind, items skipped, and classification anomalies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichmentMetrics {
    /// Items examined
    pub items_seen: usize,

    /// Items tagged per kind
    pub tagged: BTreeMap<ContentKind, usize>,

    /// Items left alone because they already carried references
    pub skipped_existing: usize,

    /// Items whose references came from the fallback policy
    pub fallback_used: usize,

    /// Items for which classification produced no references
    pub empty_results: usize,

    /// Items the store no longer knew when writing back
    pub missing_items: usize,

    /// Unresolved topic keys and how often they fired
    pub unresolved_topics: BTreeMap<String, usize>,

    /// Total runtime in milliseconds
    pub runtime_ms: u64,
}

impl EnrichmentMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tagged item
    pub fn record_tagged(&mut self, kind: ContentKind) {
        *self.tagged.entry(kind).or_insert(0) += 1;
    }

    /// Record an item skipped because it was already tagged
    pub fn record_skipped(&mut self) {
        self.skipped_existing += 1;
    }

    /// Record a fallback classification
    pub fn record_fallback(&mut self) {
        self.fallback_used += 1;
    }

    /// Record an empty classification
    pub fn record_empty(&mut self) {
        self.empty_results += 1;
    }

    /// Record an item that vanished from the store
    pub fn record_missing(&mut self) {
        self.missing_items += 1;
    }

    /// Record an unresolved topic key
    pub fn record_unresolved(&mut self, topic: &str) {
        *self.unresolved_topics.entry(topic.to_string()).or_insert(0) += 1;
    }

    /// Get total items tagged across all kinds
    pub fn total_tagged(&self) -> usize {
        self.tagged.values().sum()
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Enrichment Summary".to_string(),
            "==================".to_string(),
            format!("Items examined: {}", self.items_seen),
            format!("Already tagged (skipped): {}", self.skipped_existing),
            format!("Fallback used: {}", self.fallback_used),
            format!("Empty results: {}", self.empty_results),
            format!("Total runtime: {}ms", self.runtime_ms),
            String::new(),
        ];

        if !self.tagged.is_empty() {
            lines.push("Tagged by kind:".to_string());
            for (kind, count) in &self.tagged {
                lines.push(format!("  {}: {}", kind, count));
            }
            lines.push(format!("  Total: {}", self.total_tagged()));
            lines.push(String::new());
        }

        if self.missing_items > 0 {
            lines.push(format!("Missing from store on write: {}", self.missing_items));
            lines.push(String::new());
        }

        if !self.unresolved_topics.is_empty() {
            lines.push("Unresolved topic keys:".to_string());
            for (topic, count) in &self.unresolved_topics {
                lines.push(format!("  {}: {}", topic, count));
            }
        }

        lines.join("\n").trim_end().to_string()
    }
}

//! Core Enricher implementation: classify every item of a store and write references back

use crate::{EnricherConfig, EnricherError, EnrichmentMetrics};
use docpin_catalog::ReferenceCatalog;
use docpin_classifier::Classifier;
use docpin_domain::traits::ContentStore;
use docpin_domain::{ContentKind, ReferenceEntry};
use std::time::Instant;

/// One item whose references were (or, in dry-run mode, would be) replaced
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedItem {
    /// Item id
    pub id: String,
    /// Item kind
    pub kind: ContentKind,
    /// References chosen for the item
    pub references: Vec<ReferenceEntry>,
    /// Whether the kind fallback produced the references
    pub used_fallback: bool,
}

/// Outcome of an enrichment run
#[derive(Debug, Clone, Default)]
pub struct EnrichmentReport {
    /// Counters for the run
    pub metrics: EnrichmentMetrics,
    /// Per-item changes, in store order
    pub changes: Vec<TaggedItem>,
}

/// Batch tagger over a [`ContentStore`]
///
/// # Examples
///
/// ```
/// use docpin_catalog::ReferenceCatalog;
/// use docpin_classifier::Classifier;
/// use docpin_domain::{ContentItem, ContentKind};
/// use docpin_enricher::Enricher;
/// use docpin_store::MemoryContentStore;
///
/// let catalog = ReferenceCatalog::builtin().unwrap();
/// let classifier = Classifier::builtin();
/// let mut store = MemoryContentStore::new(vec![
///     ContentItem::new("grid", ContentKind::Styling).with_title("Build a grid layout"),
/// ]);
///
/// let report = Enricher::default_config().run(&mut store, &classifier, &catalog).unwrap();
/// assert_eq!(report.metrics.total_tagged(), 1);
/// ```
pub struct Enricher {
    config: EnricherConfig,
}

impl Enricher {
    /// Create a new Enricher with the given configuration
    pub fn new(config: EnricherConfig) -> Self {
        Self { config }
    }

    /// Create an Enricher with default configuration
    pub fn default_config() -> Self {
        Self::new(EnricherConfig::default())
    }

    /// Get the configuration
    pub fn config(&self) -> &EnricherConfig {
        &self.config
    }

    /// Classify every item in the store and write the references back
    ///
    /// Items that already carry references are skipped unless `force` is set,
    /// so repeated runs leave the store unchanged. The store is flushed once,
    /// and only when something changed outside dry-run mode.
    pub fn run<S: ContentStore>(
        &self,
        store: &mut S,
        classifier: &Classifier,
        catalog: &ReferenceCatalog,
    ) -> Result<EnrichmentReport, EnricherError>
    where
        S::Error: std::fmt::Display,
    {
        let start = Instant::now();
        let mut report = EnrichmentReport::default();

        let items = store
            .items()
            .map_err(|e| EnricherError::Store(format!("Failed to load items: {}", e)))?;

        for item in items {
            report.metrics.items_seen += 1;

            if item.has_references() && !self.config.force {
                tracing::debug!(item = %item.id, "Already tagged, skipping");
                report.metrics.record_skipped();
                continue;
            }

            let classification = classifier.classify_detailed(&item, catalog);

            for topic in &classification.unresolved_topics {
                tracing::warn!(item = %item.id, topic = %topic, "Topic key not in catalog");
                report.metrics.record_unresolved(topic);
            }

            if classification.references.is_empty() {
                report.metrics.record_empty();
                if self.config.skip_empty_results {
                    tracing::debug!(item = %item.id, "No references, leaving item untouched");
                    continue;
                }
            }
            if classification.used_fallback {
                report.metrics.record_fallback();
            }

            if self.config.dry_run {
                tracing::info!(
                    "DRY RUN: Would tag {} ({}) with {} references",
                    item.id,
                    item.kind,
                    classification.references.len()
                );
            } else {
                let found = store
                    .set_references(&item.id, classification.references.clone())
                    .map_err(|e| {
                        EnricherError::Store(format!("Failed to update {}: {}", item.id, e))
                    })?;
                if !found {
                    tracing::warn!(item = %item.id, "Item disappeared from store");
                    report.metrics.record_missing();
                    continue;
                }
            }

            report.metrics.record_tagged(item.kind.clone());
            report.changes.push(TaggedItem {
                id: item.id,
                kind: item.kind,
                references: classification.references,
                used_fallback: classification.used_fallback,
            });
        }

        if !self.config.dry_run && !report.changes.is_empty() {
            store
                .flush()
                .map_err(|e| EnricherError::Store(format!("Failed to flush store: {}", e)))?;
        }

        report.metrics.runtime_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Enrichment complete: {} examined, {} tagged, {} skipped",
            report.metrics.items_seen,
            report.metrics.total_tagged(),
            report.metrics.skipped_existing
        );

        Ok(report)
    }
}

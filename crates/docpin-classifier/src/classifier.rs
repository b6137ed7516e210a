//! Reference recommendation logic

use crate::{builtin_registry, ClassifierConfig, ClassifierError, RuleRegistry, SearchText};
use docpin_catalog::ReferenceCatalog;
use docpin_domain::{ContentItem, ContentKind, ReferenceEntry};
use std::collections::HashSet;
use tracing::debug;

/// Result of classifying one item
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Classification {
    /// Recommended references, deduplicated and capped
    pub references: Vec<ReferenceEntry>,

    /// Topic keys of the rules that fired, in declaration order
    pub matched_topics: Vec<String>,

    /// Topic keys that fired (or were chosen as fallback) but are not in the catalog
    pub unresolved_topics: Vec<String>,

    /// No rule produced a candidate and the fallback policy was applied
    pub used_fallback: bool,
}

/// A topic key the classifier may request that the catalog does not hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedKey {
    /// Kind whose battery or fallback references the key
    pub kind: ContentKind,

    /// Missing topic key
    pub key: String,
}

/// The classifier recommends references for content items
///
/// Holds no per-call state; one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    registry: RuleRegistry,
    config: ClassifierConfig,
}

impl Classifier {
    /// Create a classifier from a registry and configuration
    pub fn new(registry: RuleRegistry, config: ClassifierConfig) -> Result<Self, ClassifierError> {
        config.validate().map_err(ClassifierError::Config)?;
        Ok(Self { registry, config })
    }

    /// Classifier with the built-in batteries and default configuration
    pub fn builtin() -> Self {
        Self {
            registry: builtin_registry(),
            config: ClassifierConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(self, config: ClassifierConfig) -> Result<Self, ClassifierError> {
        Self::new(self.registry, config)
    }

    /// Active configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Active rule registry
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Recommend references for an item
    ///
    /// Never fails: unknown kinds and unresolved topic keys degrade to fewer
    /// (possibly zero) references.
    pub fn classify(&self, item: &ContentItem, catalog: &ReferenceCatalog) -> Vec<ReferenceEntry> {
        self.classify_detailed(item, catalog).references
    }

    /// Recommend references and report how they were chosen
    pub fn classify_detailed(&self, item: &ContentItem, catalog: &ReferenceCatalog) -> Classification {
        let text = SearchText::from_item(item);
        let mut candidates = Vec::new();
        let mut matched_topics = Vec::new();
        let mut unresolved_topics = Vec::new();

        // 1. Every rule of the kind's battery, in declaration order
        if let Some(battery) = self.registry.battery(&item.kind) {
            for rule in battery.iter().filter(|rule| rule.matches(&text)) {
                debug!(item = %item.id, topic = %rule.topic, "Rule fired");
                matched_topics.push(rule.topic.clone());

                match catalog.get(&rule.topic) {
                    Some(entry) => candidates.push(entry),
                    None => unresolved_topics.push(rule.topic.clone()),
                }
            }
        }

        // 2. First occurrence of each URL wins
        let mut references = dedup_by_url(candidates);

        // 3. Fallback only when nothing resolved
        let used_fallback = references.is_empty();
        if used_fallback {
            let mut fallback = Vec::new();
            for key in self.fallback_keys(&item.kind, item.level) {
                match catalog.get(key) {
                    Some(entry) => fallback.push(entry),
                    None => unresolved_topics.push(key.to_string()),
                }
            }
            references = dedup_by_url(fallback);
            debug!(item = %item.id, kind = %item.kind, count = references.len(), "Applied fallback");
        }

        // 4. Cap
        references.truncate(self.config.max_references);

        Classification {
            references: references.into_iter().cloned().collect(),
            matched_topics,
            unresolved_topics,
            used_fallback,
        }
    }

    /// Topic keys referenced by rules or fallbacks that the catalog lacks
    pub fn unresolved_keys(&self, catalog: &ReferenceCatalog) -> Vec<UnresolvedKey> {
        let mut missing = Vec::new();
        let mut seen = HashSet::new();

        let mut check = |kind: &ContentKind, key: &str| {
            if !catalog.contains_key(key) && seen.insert((kind.clone(), key.to_string())) {
                missing.push(UnresolvedKey {
                    kind: kind.clone(),
                    key: key.to_string(),
                });
            }
        };

        for (kind, battery) in self.registry.iter() {
            for rule in battery.iter() {
                check(kind, &rule.topic);
            }
        }

        let config = &self.config;
        let fallbacks = [
            (ContentKind::Script, &config.script_baseline_key),
            (ContentKind::Script, &config.script_fundamentals_key),
            (ContentKind::Script, &config.script_advanced_key),
            (ContentKind::Markup, &config.markup_baseline_key),
            (ContentKind::Styling, &config.styling_baseline_key),
        ];
        for (kind, key) in &fallbacks {
            check(kind, key);
        }

        missing
    }

    /// Fallback topic keys for a kind, in priority order
    fn fallback_keys(&self, kind: &ContentKind, level: Option<u8>) -> Vec<&str> {
        let config = &self.config;
        match kind {
            ContentKind::Script => {
                let advanced = level.is_some_and(|l| l >= config.advanced_level_threshold);
                let second = if advanced {
                    &config.script_advanced_key
                } else {
                    &config.script_fundamentals_key
                };
                vec![config.script_baseline_key.as_str(), second.as_str()]
            }
            ContentKind::Markup => vec![config.markup_baseline_key.as_str()],
            ContentKind::Styling => vec![config.styling_baseline_key.as_str()],
            ContentKind::Other(_) => Vec::new(),
        }
    }
}

/// Keep the first entry for each URL, preserving order
fn dedup_by_url(candidates: Vec<&ReferenceEntry>) -> Vec<&ReferenceEntry> {
    let mut seen: HashSet<&str> = HashSet::new();
    candidates
        .into_iter()
        .filter(|entry| seen.insert(entry.url.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Predicate, RuleBattery};
    use docpin_catalog::CatalogBuilder;
    use proptest::prelude::*;

    fn fixture_catalog() -> ReferenceCatalog {
        CatalogBuilder::new()
            .entry("array", "MDN: Array", "https://example.com/array", "Arrays")
            .entry("array-basics", "Arrays again", "https://example.com/array", "Same page")
            .entry("sorting-visualizer", "VisuAlgo", "https://example.com/sorting", "Sorting")
            .entry("javascript-guide", "JS Guide", "https://example.com/guide", "Guide")
            .entry("js-first-steps", "First Steps", "https://example.com/first-steps", "Basics")
            .entry("js-data-structures", "Data Structures", "https://example.com/ds", "Advanced")
            .entry("html-generic", "HTML Elements", "https://example.com/html", "Elements")
            .entry("html-table", "HTML Tables", "https://example.com/table", "Tables")
            .entry("html-basics", "HTML Basics", "https://example.com/html-basics", "Basics")
            .entry("css-basics", "CSS Basics", "https://example.com/css-basics", "Basics")
            .build()
            .unwrap()
    }

    fn fixture_classifier() -> Classifier {
        let registry = RuleRegistry::new()
            .with_battery(
                ContentKind::Script,
                RuleBattery::new()
                    .rule(Predicate::contains("array"), "array")
                    .rule(Predicate::has_tag("sorting"), "sorting-visualizer"),
            )
            .with_battery(
                ContentKind::Markup,
                RuleBattery::new()
                    .rule(Predicate::Always, "html-generic")
                    .rule(Predicate::contains("table"), "html-table"),
            );

        let config = ClassifierConfig {
            markup_baseline_key: "html-basics".to_string(),
            ..ClassifierConfig::default()
        };
        Classifier::new(registry, config).unwrap()
    }

    fn keys(references: &[ReferenceEntry]) -> Vec<&str> {
        references.iter().map(|r| r.key.as_str()).collect()
    }

    #[test]
    fn test_bubble_sort_matches_both_rules() {
        let item = ContentItem::new("bubble-sort", ContentKind::Script)
            .with_title("Bubble Sort")
            .with_tags(["sorting", "algorithms"])
            .with_body("sort an array ascending");

        let result = fixture_classifier().classify(&item, &fixture_catalog());
        assert_eq!(keys(&result), vec!["array", "sorting-visualizer"]);
    }

    #[test]
    fn test_script_fallback_low_level() {
        let item = ContentItem::new("empty", ContentKind::Script).with_level(1);

        let result = fixture_classifier().classify_detailed(&item, &fixture_catalog());
        assert!(result.used_fallback);
        assert_eq!(keys(&result.references), vec!["javascript-guide", "js-first-steps"]);
    }

    #[test]
    fn test_script_fallback_missing_level_is_fundamentals() {
        let item = ContentItem::new("empty", ContentKind::Script);
        let result = fixture_classifier().classify(&item, &fixture_catalog());
        assert_eq!(keys(&result), vec!["javascript-guide", "js-first-steps"]);
    }

    #[test]
    fn test_script_fallback_high_level() {
        let item = ContentItem::new("empty", ContentKind::Script).with_level(4);
        let result = fixture_classifier().classify(&item, &fixture_catalog());
        assert_eq!(keys(&result), vec!["javascript-guide", "js-data-structures"]);
    }

    #[test]
    fn test_markup_generic_rule_first() {
        let item = ContentItem::new("table", ContentKind::Markup)
            .with_body("<table><tr><td>1</td></tr></table>");

        let result = fixture_classifier().classify_detailed(&item, &fixture_catalog());
        assert!(!result.used_fallback);
        assert_eq!(keys(&result.references), vec!["html-generic", "html-table"]);
    }

    #[test]
    fn test_same_url_kept_once_at_first_position() {
        let registry = RuleRegistry::new().with_battery(
            ContentKind::Script,
            RuleBattery::new()
                .rule(Predicate::contains("array"), "array")
                .rule(Predicate::has_tag("sorting"), "sorting-visualizer")
                .rule(Predicate::contains("list"), "array")
                .rule(Predicate::contains("elements"), "array-basics"),
        );
        let classifier = Classifier::new(registry, ClassifierConfig::default()).unwrap();
        let item = ContentItem::new("dupes", ContentKind::Script)
            .with_body("an array is a list of elements")
            .with_tags(["sorting"]);

        let result = classifier.classify_detailed(&item, &fixture_catalog());
        assert_eq!(keys(&result.references), vec!["array", "sorting-visualizer"]);
        assert_eq!(result.matched_topics.len(), 4);
    }

    #[test]
    fn test_unknown_kind_is_empty() {
        let item = ContentItem::new("sql", ContentKind::parse("unregistered-kind"))
            .with_body("select an array of rows");

        let result = fixture_classifier().classify_detailed(&item, &fixture_catalog());
        assert!(result.references.is_empty());
        assert!(result.matched_topics.is_empty());
    }

    #[test]
    fn test_styling_without_battery_uses_baseline() {
        let item = ContentItem::new("css", ContentKind::Styling).with_body("center a div");
        let result = fixture_classifier().classify(&item, &fixture_catalog());
        assert_eq!(keys(&result), vec!["css-basics"]);
    }

    #[test]
    fn test_unresolved_topic_is_skipped() {
        let registry = RuleRegistry::new().with_battery(
            ContentKind::Script,
            RuleBattery::new()
                .rule(Predicate::contains("array"), "missing-topic")
                .rule(Predicate::contains("array"), "array"),
        );
        let classifier = Classifier::new(registry, ClassifierConfig::default()).unwrap();
        let item = ContentItem::new("x", ContentKind::Script).with_body("array");

        let result = classifier.classify_detailed(&item, &fixture_catalog());
        assert_eq!(keys(&result.references), vec!["array"]);
        assert_eq!(result.unresolved_topics, vec!["missing-topic"]);
        assert!(!result.used_fallback);
    }

    #[test]
    fn test_only_unresolved_topics_fall_back() {
        let registry = RuleRegistry::new().with_battery(
            ContentKind::Script,
            RuleBattery::new().rule(Predicate::Always, "missing-topic"),
        );
        let classifier = Classifier::new(registry, ClassifierConfig::default()).unwrap();
        let item = ContentItem::new("x", ContentKind::Script);

        let result = classifier.classify_detailed(&item, &fixture_catalog());
        assert!(result.used_fallback);
        assert_eq!(keys(&result.references), vec!["javascript-guide", "js-first-steps"]);
    }

    #[test]
    fn test_short_result_is_not_padded_by_fallback() {
        let item = ContentItem::new("x", ContentKind::Script).with_body("array");
        let result = fixture_classifier().classify_detailed(&item, &fixture_catalog());
        assert!(!result.used_fallback);
        assert_eq!(keys(&result.references), vec!["array"]);
    }

    #[test]
    fn test_cap_truncates_in_order() {
        let classifier = fixture_classifier().with_config(ClassifierConfig::compact()).unwrap();
        let item = ContentItem::new("x", ContentKind::Markup).with_body("table");
        let result = classifier.classify(&item, &fixture_catalog());
        assert_eq!(keys(&result), vec!["html-generic"]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ClassifierConfig {
            max_references: 0,
            ..ClassifierConfig::default()
        };
        let result = Classifier::new(RuleRegistry::new(), config);
        assert!(matches!(result, Err(ClassifierError::Config(_))));
    }

    #[test]
    fn test_builtin_keys_resolve_in_builtin_catalog() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        let missing = Classifier::builtin().unresolved_keys(&catalog);
        assert!(missing.is_empty(), "unresolved: {:?}", missing);
    }

    #[test]
    fn test_unresolved_keys_reports_fixture_gaps() {
        let missing = fixture_classifier().unresolved_keys(&ReferenceCatalog::default());
        assert!(missing.contains(&UnresolvedKey {
            kind: ContentKind::Markup,
            key: "html-table".to_string(),
        }));
        assert!(missing.contains(&UnresolvedKey {
            kind: ContentKind::Styling,
            key: "css-basics".to_string(),
        }));
    }

    #[test]
    fn test_builtin_map_exercise() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        let item = ContentItem::new("double", ContentKind::Script)
            .with_title("Double Numbers")
            .with_body("Use map to double each value in the array");

        let result = Classifier::builtin().classify(&item, &catalog);
        assert_eq!(keys(&result), vec!["array", "array-map"]);
    }

    #[test]
    fn test_builtin_flexbox_exercise() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        let item = ContentItem::new("center", ContentKind::Styling)
            .with_title("Center with Flexbox")
            .with_tags(["flexbox"]);

        let result = Classifier::builtin().classify(&item, &catalog);
        assert_eq!(keys(&result), vec!["css-reference", "css-flexbox"]);
    }

    #[test]
    fn test_classifier_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Classifier>();
        assert_send_sync::<ReferenceCatalog>();
    }

    const VOCAB: &[&str] = &[
        "array", "map", "sort", "sorting", "table", "flex", "grid", "string", "closure",
        "promise", "form", "list", "color", "hover", "loop", "recursion", "sitemap", "",
    ];

    fn arb_item() -> impl Strategy<Value = ContentItem> {
        let words = prop::collection::vec(prop::sample::select(VOCAB.to_vec()), 0..12);
        let tags = prop::collection::vec(prop::sample::select(VOCAB.to_vec()), 0..4);
        let kind = prop::sample::select(vec!["javascript", "html", "css", "sql"]);
        (kind, words, tags, prop::option::of(0u8..6)).prop_map(|(kind, words, tags, level)| {
            let mut item = ContentItem::new("prop", ContentKind::parse(kind))
                .with_body(words.join(" "))
                .with_tags(tags);
            item.level = level;
            item
        })
    }

    proptest! {
        #[test]
        fn classify_is_deterministic(item in arb_item()) {
            let catalog = ReferenceCatalog::builtin().unwrap();
            let classifier = Classifier::builtin();
            prop_assert_eq!(
                classifier.classify(&item, &catalog),
                classifier.classify(&item, &catalog)
            );
        }

        #[test]
        fn classify_respects_cap(item in arb_item(), cap in 1usize..6) {
            let catalog = ReferenceCatalog::builtin().unwrap();
            let config = ClassifierConfig { max_references: cap, ..ClassifierConfig::default() };
            let classifier = Classifier::builtin().with_config(config).unwrap();
            prop_assert!(classifier.classify(&item, &catalog).len() <= cap);
        }

        #[test]
        fn classify_never_repeats_a_url(item in arb_item()) {
            let catalog = ReferenceCatalog::builtin().unwrap();
            let references = Classifier::builtin().classify(&item, &catalog);
            let urls: HashSet<&str> = references.iter().map(|r| r.url.as_str()).collect();
            prop_assert_eq!(urls.len(), references.len());
        }

        #[test]
        fn fallback_only_when_nothing_resolves(item in arb_item()) {
            let catalog = ReferenceCatalog::builtin().unwrap();
            let result = Classifier::builtin().classify_detailed(&item, &catalog);
            let resolved = result.matched_topics.iter().any(|t| catalog.contains_key(t));
            prop_assert_eq!(result.used_fallback, !resolved);
        }
    }
}

//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use docpin_classifier::{Classification, RuleRegistry, RulesFile};
use docpin_domain::{ContentKind, ReferenceEntry};
use docpin_enricher::EnrichmentReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of reference entries.
    pub fn format_references(&self, entries: &[ReferenceEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&references_json(entries))?),
            OutputFormat::Table => Ok(self.references_table(entries)),
            OutputFormat::Quiet => {
                let urls: Vec<&str> = entries.iter().map(|e| e.url.as_str()).collect();
                Ok(urls.join("\n"))
            }
        }
    }

    /// Format the result of classifying one item.
    pub fn format_classification(&self, id: &str, classification: &Classification) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "id": id,
                    "references": references_json(&classification.references),
                    "matched_topics": classification.matched_topics,
                    "unresolved_topics": classification.unresolved_topics,
                    "used_fallback": classification.used_fallback,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => self.format_references(&classification.references),
            OutputFormat::Table => {
                let mut out = self.references_table(&classification.references);
                if classification.used_fallback {
                    out.push('\n');
                    out.push_str(&self.info("No rule matched; fallback references used"));
                }
                if !classification.unresolved_topics.is_empty() {
                    out.push('\n');
                    out.push_str(&self.warning(&format!(
                        "Topics missing from catalog: {}",
                        classification.unresolved_topics.join(", ")
                    )));
                }
                Ok(out)
            }
        }
    }

    /// Format a single catalog entry.
    pub fn format_entry(&self, entry: &ReferenceEntry) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&entry_json(entry))?),
            OutputFormat::Quiet => Ok(entry.url.clone()),
            OutputFormat::Table => Ok(format!(
                "{}\n  Label: {}\n  URL: {}\n  Description: {}",
                self.colorize(&entry.key, "cyan"),
                entry.label,
                entry.url,
                entry.description
            )),
        }
    }

    /// Format the catalog listing.
    pub fn format_catalog<'a, I>(&self, entries: I) -> Result<String>
    where
        I: IntoIterator<Item = &'a ReferenceEntry>,
    {
        let entries: Vec<&ReferenceEntry> = entries.into_iter().collect();
        match self.format {
            OutputFormat::Json => {
                let values: Vec<serde_json::Value> = entries.iter().map(|e| entry_json(e)).collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Quiet => {
                let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
                Ok(keys.join("\n"))
            }
            OutputFormat::Table => {
                if entries.is_empty() {
                    return Ok(self.colorize("Catalog is empty.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Key", "Label", "URL"]);
                for entry in entries {
                    builder.push_record([entry.key.as_str(), entry.label.as_str(), entry.url.as_str()]);
                }
                Ok(styled(builder))
            }
        }
    }

    /// Format rule batteries, optionally restricted to one kind.
    pub fn format_rules(&self, registry: &RuleRegistry, kind: Option<&ContentKind>) -> Result<String> {
        let mut file = RulesFile::from(registry);
        if let Some(kind) = kind {
            file.batteries.retain(|b| b.kind == kind.as_str());
        }

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&file)?),
            OutputFormat::Quiet => {
                let topics: Vec<String> = file
                    .batteries
                    .iter()
                    .flat_map(|b| b.rules.iter().map(move |r| format!("{}\t{}", b.kind, r.topic)))
                    .collect();
                Ok(topics.join("\n"))
            }
            OutputFormat::Table => {
                if file.batteries.is_empty() {
                    return Ok(self.colorize("No rule batteries.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Kind", "#", "Topic", "When"]);
                for battery in &file.batteries {
                    for (idx, rule) in battery.rules.iter().enumerate() {
                        let when = serde_json::to_string(&rule.when)?;
                        builder.push_record([
                            battery.kind.clone(),
                            (idx + 1).to_string(),
                            rule.topic.clone(),
                            when,
                        ]);
                    }
                }
                Ok(styled(builder))
            }
        }
    }

    /// Format the outcome of a tagging run.
    pub fn format_report(&self, report: &EnrichmentReport, dry_run: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let metrics = &report.metrics;
                let tagged: serde_json::Map<String, serde_json::Value> = metrics
                    .tagged
                    .iter()
                    .map(|(kind, count)| (kind.to_string(), serde_json::json!(count)))
                    .collect();
                let changes: Vec<serde_json::Value> = report
                    .changes
                    .iter()
                    .map(|c| {
                        serde_json::json!({
                            "id": c.id,
                            "kind": c.kind.as_str(),
                            "references": references_json(&c.references),
                            "used_fallback": c.used_fallback,
                        })
                    })
                    .collect();
                let value = serde_json::json!({
                    "dry_run": dry_run,
                    "items_seen": metrics.items_seen,
                    "tagged": tagged,
                    "skipped_existing": metrics.skipped_existing,
                    "fallback_used": metrics.fallback_used,
                    "empty_results": metrics.empty_results,
                    "missing_items": metrics.missing_items,
                    "unresolved_topics": metrics.unresolved_topics,
                    "runtime_ms": metrics.runtime_ms,
                    "changes": changes,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => {
                let ids: Vec<&str> = report.changes.iter().map(|c| c.id.as_str()).collect();
                Ok(ids.join("\n"))
            }
            OutputFormat::Table => {
                let mut out = report.metrics.summary();
                out.push_str("\n\n");
                if report.changes.is_empty() {
                    out.push_str(&self.info("Nothing to tag"));
                    return Ok(out);
                }

                let mut builder = Builder::default();
                builder.push_record(["Item", "Kind", "References", "Fallback"]);
                for change in &report.changes {
                    let refs: Vec<&str> = change.references.iter().map(|r| r.key.as_str()).collect();
                    builder.push_record([
                        change.id.clone(),
                        change.kind.to_string(),
                        refs.join(", "),
                        if change.used_fallback { "yes" } else { "" }.to_string(),
                    ]);
                }
                out.push_str(&styled(builder));
                out.push('\n');

                let verb = if dry_run { "Would tag" } else { "Tagged" };
                out.push_str(&self.success(&format!("{} {} item(s)", verb, report.changes.len())));
                Ok(out)
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn references_table(&self, entries: &[ReferenceEntry]) -> String {
        if entries.is_empty() {
            return self.colorize("No references.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Key", "Label", "URL"]);
        for entry in entries {
            builder.push_record([entry.key.as_str(), entry.label.as_str(), entry.url.as_str()]);
        }
        styled(builder)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn entry_json(entry: &ReferenceEntry) -> serde_json::Value {
    serde_json::json!({
        "key": entry.key,
        "label": entry.label,
        "url": entry.url,
        "description": entry.description,
    })
}

fn references_json(entries: &[ReferenceEntry]) -> Vec<serde_json::Value> {
    entries.iter().map(entry_json).collect()
}

//! docpin Classifier
//!
//! Recommends curated reference entries for a content item.
//!
//! The classifier provides:
//! - Search text normalization (title, summary, body and tags, lowercased)
//! - Ordered, per-kind rule batteries of predicate → topic key rules
//! - Deduplication by URL, first occurrence wins
//! - A kind-specific fallback when no rule produces a candidate
//! - A configurable cap on the number of references
//!
//! # Examples
//!
//! ```
//! use docpin_catalog::ReferenceCatalog;
//! use docpin_classifier::Classifier;
//! use docpin_domain::{ContentItem, ContentKind};
//!
//! let catalog = ReferenceCatalog::builtin().unwrap();
//! let classifier = Classifier::builtin();
//!
//! let item = ContentItem::new("double-values", ContentKind::Script)
//!     .with_title("Double the values")
//!     .with_body("Use map to double every number in the array");
//!
//! let references = classifier.classify(&item, &catalog);
//! assert!(!references.is_empty());
//! assert!(references.len() <= 3);
//! ```

#![warn(missing_docs)]

mod builtin;
mod classifier;
mod config;
mod error;
mod registry;
mod rule;
mod text;

pub use builtin::builtin_registry;
pub use classifier::{Classification, Classifier, UnresolvedKey};
pub use config::ClassifierConfig;
pub use error::ClassifierError;
pub use registry::{BatteryRecord, RuleRecord, RuleRegistry, RulesFile};
pub use rule::{Predicate, Rule, RuleBattery};
pub use text::SearchText;

//! docpin Enricher
//!
//! Batch tagging of a whole content collection.
//!
//! # Overview
//!
//! The Enricher walks every item of a [`ContentStore`](docpin_domain::traits::ContentStore),
//! asks the classifier for references and writes them back:
//! - **Idempotent runs**: items that already carry references are skipped unless forced
//! - **Dry runs**: classify and log without writing
//! - **Single flush**: the store is persisted once, at the end of the run
//! - **Metrics**: counts per kind, fallbacks, empty results and unresolved topic keys
//!
//! # Usage
//!
//! ```no_run
//! use docpin_catalog::ReferenceCatalog;
//! use docpin_classifier::Classifier;
//! use docpin_enricher::{Enricher, EnricherConfig};
//! use docpin_store::JsonContentStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = ReferenceCatalog::builtin()?;
//! let classifier = Classifier::builtin();
//! let mut store = JsonContentStore::open("exercises.json")?;
//!
//! let report = Enricher::new(EnricherConfig::default()).run(&mut store, &classifier, &catalog)?;
//! println!("{}", report.metrics.summary());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [enricher]
//! dry_run = false
//! force = false
//! skip_empty_results = false
//! ```

#![warn(missing_docs)]

mod config;
mod enricher;
mod error;
mod metrics;

pub use config::EnricherConfig;
pub use enricher::{Enricher, EnrichmentReport, TaggedItem};
pub use error::EnricherError;
pub use metrics::EnrichmentMetrics;

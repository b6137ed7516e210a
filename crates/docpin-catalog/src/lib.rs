//! docpin Catalog
//!
//! The read-only set of curated reference entries, addressed by topic key.
//!
//! The catalog provides:
//! - Keyed lookup that never fails (`None` for unknown keys)
//! - Duplicate-key detection at construction time
//! - A built-in MDN-oriented catalog for JavaScript, HTML and CSS topics
//! - Loading and saving catalogs as TOML files
//!
//! # Examples
//!
//! ```
//! use docpin_catalog::ReferenceCatalog;
//!
//! let catalog = ReferenceCatalog::builtin().expect("built-in catalog is valid");
//! assert!(catalog.get("array").is_some());
//! assert!(catalog.get("no-such-topic").is_none());
//! ```

#![warn(missing_docs)]

mod builtin;
mod catalog;
mod error;
mod file;

pub use builtin::builtin_entries;
pub use catalog::{CatalogBuilder, ReferenceCatalog};
pub use error::CatalogError;
pub use file::{CatalogFile, EntryRecord};

//! docpin Domain Layer
//!
//! This crate contains the domain model shared by every other docpin crate.
//! It has ZERO external dependencies and defines the value objects and trait
//! interfaces that the catalog, classifier, store and enricher layers build on.
//!
//! ## Key Concepts
//!
//! - **Content Item**: one record to be enriched with reference links (an exercise)
//! - **Content Kind**: the declared type of an item, selecting its rule battery
//! - **Reference Entry**: one curated documentation link, addressed by topic key
//! - **Content Store**: the collaborator that supplies items and persists references
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure value types only
//! - Storage and classification live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod content;
pub mod kind;
pub mod reference;
pub mod traits;

// Re-exports for convenience
pub use content::ContentItem;
pub use kind::ContentKind;
pub use reference::ReferenceEntry;
pub use traits::ContentStore;

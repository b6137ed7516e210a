//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{ContentItem, ReferenceEntry};

/// Trait for reading content items and persisting their references
///
/// Implemented by the infrastructure layer (docpin-store)
pub trait ContentStore {
    /// Error type for store operations
    type Error;

    /// Snapshot of every item in store order
    fn items(&self) -> Result<Vec<ContentItem>, Self::Error>;

    /// Replace the references of one item
    ///
    /// Returns `Ok(false)` when no item carries the given id.
    fn set_references(
        &mut self,
        id: &str,
        references: Vec<ReferenceEntry>,
    ) -> Result<bool, Self::Error>;

    /// Persist pending changes
    fn flush(&mut self) -> Result<(), Self::Error>;
}

//! In-memory content store

use docpin_domain::{ContentItem, ContentStore, ReferenceEntry};
use std::convert::Infallible;

/// Content store holding items in memory
///
/// Useful for library callers that already have items loaded, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentStore {
    items: Vec<ContentItem>,
    flushes: usize,
}

impl MemoryContentStore {
    /// Create a store from items
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items, flushes: 0 }
    }

    /// Look up one item by id
    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of times `flush` was called
    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl ContentStore for MemoryContentStore {
    type Error = Infallible;

    fn items(&self) -> Result<Vec<ContentItem>, Self::Error> {
        Ok(self.items.clone())
    }

    fn set_references(
        &mut self,
        id: &str,
        references: Vec<ReferenceEntry>,
    ) -> Result<bool, Self::Error> {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.references = references;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

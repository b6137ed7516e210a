//! Keyed reference catalog

use crate::CatalogError;
use docpin_domain::ReferenceEntry;
use std::collections::HashMap;

/// Immutable set of reference entries addressed by topic key
///
/// Built once at startup and shared read-only afterwards. Entries keep their
/// declaration order for listing.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    entries: Vec<ReferenceEntry>,
    index: HashMap<String, usize>,
}

impl ReferenceCatalog {
    /// Build a catalog from entries, failing on the first duplicate key
    ///
    /// # Examples
    ///
    /// ```
    /// use docpin_catalog::{CatalogError, ReferenceCatalog};
    /// use docpin_domain::ReferenceEntry;
    ///
    /// let result = ReferenceCatalog::new(vec![
    ///     ReferenceEntry::new("array", "Array", "https://example.com/a", ""),
    ///     ReferenceEntry::new("array", "Array again", "https://example.com/b", ""),
    /// ]);
    /// assert!(matches!(result, Err(CatalogError::DuplicateKey(k)) if k == "array"));
    /// ```
    pub fn new<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = ReferenceEntry>,
    {
        let mut catalog = Self::default();

        for entry in entries {
            validate_entry(&entry)?;

            if catalog.index.contains_key(&entry.key) {
                return Err(CatalogError::DuplicateKey(entry.key));
            }

            catalog.index.insert(entry.key.clone(), catalog.entries.len());
            catalog.entries.push(entry);
        }

        Ok(catalog)
    }

    /// The built-in MDN-oriented catalog
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(crate::builtin_entries())
    }

    /// Look up an entry by topic key
    pub fn get(&self, key: &str) -> Option<&ReferenceEntry> {
        self.index.get(key).map(|&idx| &self.entries[idx])
    }

    /// Whether the catalog holds the given key
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &ReferenceEntry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Incremental catalog construction
///
/// Collects entries and defers the duplicate check to [`CatalogBuilder::build`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: Vec<ReferenceEntry>,
}

impl CatalogBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entry
    pub fn entry(
        mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.entries
            .push(ReferenceEntry::new(key, label, url, description));
        self
    }

    /// Add an already-built entry
    pub fn push(mut self, entry: ReferenceEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Validate and freeze the catalog
    pub fn build(self) -> Result<ReferenceCatalog, CatalogError> {
        ReferenceCatalog::new(self.entries)
    }
}

/// Reject entries that could never be rendered as a link
fn validate_entry(entry: &ReferenceEntry) -> Result<(), CatalogError> {
    if entry.key.trim().is_empty() {
        return Err(CatalogError::InvalidEntry(format!(
            "entry '{}' has an empty key",
            entry.label
        )));
    }

    if entry.url.trim().is_empty() {
        return Err(CatalogError::InvalidEntry(format!(
            "entry '{}' has an empty url",
            entry.key
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> ReferenceCatalog {
        CatalogBuilder::new()
            .entry("array", "MDN: Array", "https://example.com/array", "Arrays")
            .entry("closures", "MDN: Closures", "https://example.com/closures", "Closures")
            .build()
            .unwrap()
    }

    #[test]
    fn test_lookup() {
        let catalog = fixture();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("array").unwrap().label, "MDN: Array");
        assert!(catalog.contains_key("closures"));
    }

    #[test]
    fn test_unknown_key_is_none() {
        let catalog = fixture();
        assert!(catalog.get("flexbox").is_none());
        assert!(!catalog.contains_key("flexbox"));
    }

    #[test]
    fn test_duplicate_key_fails_fast() {
        let result = CatalogBuilder::new()
            .entry("array", "Array", "https://example.com/a", "")
            .entry("map", "Map", "https://example.com/m", "")
            .entry("array", "Array 2", "https://example.com/b", "")
            .build();

        match result {
            Err(CatalogError::DuplicateKey(key)) => assert_eq!(key, "array"),
            other => panic!("Expected DuplicateKey, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_url_rejected() {
        let result = CatalogBuilder::new().entry("array", "Array", "  ", "").build();
        assert!(matches!(result, Err(CatalogError::InvalidEntry(_))));
    }

    #[test]
    fn test_iteration_keeps_declaration_order() {
        let catalog = fixture();
        let keys: Vec<&str> = catalog.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["array", "closures"]);
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get("javascript-guide").is_some());
        assert!(catalog.get("html-basics").is_some());
        assert!(catalog.get("css-basics").is_some());
    }
}

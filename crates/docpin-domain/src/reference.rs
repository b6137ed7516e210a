//! Reference module - curated documentation links

/// A curated reference link, addressed by topic key
///
/// Entries are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceEntry {
    /// Topic key, unique within a catalog
    pub key: String,

    /// Human-readable link label
    pub label: String,

    /// Target URL
    pub url: String,

    /// Short description of the linked page
    pub description: String,
}

impl ReferenceEntry {
    /// Create a new reference entry
    ///
    /// # Examples
    ///
    /// ```
    /// use docpin_domain::ReferenceEntry;
    ///
    /// let entry = ReferenceEntry::new(
    ///     "array",
    ///     "MDN: Array",
    ///     "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array",
    ///     "Complete reference for JavaScript arrays",
    /// );
    /// assert_eq!(entry.key, "array");
    /// ```
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            url: url.into(),
            description: description.into(),
        }
    }
}


//! Content module - the records enriched with references

use crate::{ContentKind, ReferenceEntry};

/// One piece of content to classify (an exercise)
///
/// Only `references` is ever written as a result of classification; every
/// other field is input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentItem {
    /// Store identity of the item
    pub id: String,

    /// Declared kind, selects the rule battery
    pub kind: ContentKind,

    /// Title text (may be empty)
    pub title: String,

    /// Summary text (may be empty)
    pub summary: String,

    /// Body text (may be empty)
    pub body: String,

    /// Tags as authored; matching is case-insensitive
    pub tags: Vec<String>,

    /// Optional difficulty ordinal, used only by the fallback policy
    pub level: Option<u8>,

    /// Output slot populated by the enricher
    pub references: Vec<ReferenceEntry>,
}

impl ContentItem {
    /// Create an empty item of the given kind
    ///
    /// # Examples
    ///
    /// ```
    /// use docpin_domain::{ContentItem, ContentKind};
    ///
    /// let item = ContentItem::new("bubble-sort", ContentKind::Script)
    ///     .with_title("Bubble Sort")
    ///     .with_tags(["sorting", "algorithms"]);
    /// assert_eq!(item.tags.len(), 2);
    /// assert!(!item.has_references());
    /// ```
    pub fn new(id: impl Into<String>, kind: ContentKind) -> Self {
        Self {
            id: id.into(),
            kind,
            ..Default::default()
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the level
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    /// Whether the output slot already carries at least one reference
    pub fn has_references(&self) -> bool {
        !self.references.is_empty()
    }
}

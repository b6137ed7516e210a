//! Search text normalization

use docpin_domain::ContentItem;

/// Lowercased search input for rule predicates
///
/// The blob is title, summary, body and space-joined tags separated by single
/// spaces. Matching against it is plain substring search, so a needle can hit
/// across word boundaries ("map" matches "sitemap").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchText {
    blob: String,
    tags: Vec<String>,
}

impl SearchText {
    /// Build the search text for an item
    pub fn from_item(item: &ContentItem) -> Self {
        Self::new(&item.title, &item.summary, &item.body, &item.tags)
    }

    /// Build the search text from raw fields
    pub fn new<S: AsRef<str>>(title: &str, summary: &str, body: &str, tags: &[S]) -> Self {
        let tags: Vec<String> = tags.iter().map(|t| t.as_ref().to_lowercase()).collect();
        let tag_line = tags.join(" ");
        let blob = [title, summary, body, tag_line.as_str()]
            .join(" ")
            .to_lowercase();

        Self { blob, tags }
    }

    /// The normalized blob
    pub fn blob(&self) -> &str {
        &self.blob
    }

    /// Lowercased tags in authored order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Substring test against the blob; `needle` must already be lowercase
    pub fn contains(&self, needle: &str) -> bool {
        self.blob.contains(needle)
    }

    /// Exact tag test; `tag` must already be lowercase
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docpin_domain::ContentKind;

    #[test]
    fn test_blob_concatenates_all_fields() {
        let item = ContentItem::new("x", ContentKind::Script)
            .with_title("Bubble Sort")
            .with_summary("Classic")
            .with_body("Sort an ARRAY ascending")
            .with_tags(["Sorting", "algorithms"]);

        let text = SearchText::from_item(&item);
        assert_eq!(text.blob(), "bubble sort classic sort an array ascending sorting algorithms");
        assert_eq!(text.tags(), ["sorting", "algorithms"]);
    }

    #[test]
    fn test_empty_item() {
        let text = SearchText::from_item(&ContentItem::default());
        assert!(text.blob().trim().is_empty());
        assert!(text.tags().is_empty());
        assert!(!text.has_tag(""));
    }

    #[test]
    fn test_substring_is_not_word_aware() {
        let text = SearchText::new::<&str>("Build a sitemap", "", "", &[]);
        assert!(text.contains("map"));
    }

    #[test]
    fn test_tag_match_is_exact_and_case_insensitive() {
        let text = SearchText::new("", "", "", &["DOM", "events"]);
        assert!(text.has_tag("dom"));
        assert!(!text.has_tag("do"));
    }
}

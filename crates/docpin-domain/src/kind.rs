//! Kind module - the declared type of a content item

use std::fmt;

/// Declared type of a content item
///
/// The kind selects which rule battery and which fallback apply:
/// - Script: programming exercises (JavaScript and friends)
/// - Markup: HTML structure exercises
/// - Styling: CSS exercises
/// - Other: any kind without a registered battery
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentKind {
    /// Script-like content (the dataset default)
    Script,

    /// Markup content
    Markup,

    /// Styling content
    Styling,

    /// Unrecognized kind, stored lowercased
    Other(String),
}

impl ContentKind {
    /// Get the canonical kind name
    pub fn as_str(&self) -> &str {
        match self {
            ContentKind::Script => "javascript",
            ContentKind::Markup => "html",
            ContentKind::Styling => "css",
            ContentKind::Other(name) => name,
        }
    }

    /// Parse a kind leniently. Never fails: unknown names become `Other`.
    pub fn parse(s: &str) -> Self {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "javascript" | "js" | "script" | "typescript" | "ts" => ContentKind::Script,
            "html" | "markup" => ContentKind::Markup,
            "css" | "styling" | "style" => ContentKind::Styling,
            _ => ContentKind::Other(normalized),
        }
    }
}

impl Default for ContentKind {
    fn default() -> Self {
        ContentKind::Script
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(ContentKind::parse("JavaScript"), ContentKind::Script);
        assert_eq!(ContentKind::parse("js"), ContentKind::Script);
        assert_eq!(ContentKind::parse(" HTML "), ContentKind::Markup);
        assert_eq!(ContentKind::parse("css"), ContentKind::Styling);
        assert_eq!(ContentKind::parse("styling"), ContentKind::Styling);
    }

    #[test]
    fn test_unknown_kind_is_lowercased() {
        let kind = ContentKind::parse("SQL");
        assert_eq!(kind, ContentKind::Other("sql".to_string()));
        assert_eq!(kind.as_str(), "sql");
    }

    #[test]
    fn test_default_is_script() {
        assert_eq!(ContentKind::default(), ContentKind::Script);
    }

    proptest! {
        #[test]
        fn parse_is_stable_on_canonical_names(s in "[a-zA-Z ]{0,12}") {
            let kind = ContentKind::parse(&s);
            prop_assert_eq!(ContentKind::parse(kind.as_str()), kind);
        }
    }
}

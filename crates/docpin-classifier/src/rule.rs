//! Rules and rule batteries

use crate::SearchText;
use serde::{Deserialize, Serialize};

/// Condition evaluated against an item's search text
///
/// Needles and tags are lowercased when a [`Rule`] is built, so matching is
/// case-insensitive regardless of how the predicate was authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Always fires
    Always,

    /// Blob contains the needle
    Contains(String),

    /// Blob contains at least one needle
    ContainsAny(Vec<String>),

    /// Blob contains every needle
    ContainsAll(Vec<String>),

    /// Item carries the tag
    HasTag(String),

    /// Item carries at least one of the tags
    AnyTag(Vec<String>),

    /// At least one nested predicate holds
    Any(Vec<Predicate>),

    /// Every nested predicate holds
    All(Vec<Predicate>),

    /// Nested predicate does not hold
    Not(Box<Predicate>),
}

impl Predicate {
    /// Blob contains `needle`
    pub fn contains(needle: impl Into<String>) -> Self {
        Predicate::Contains(needle.into())
    }

    /// Blob contains any of `needles`
    pub fn contains_any<I, S>(needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::ContainsAny(needles.into_iter().map(Into::into).collect())
    }

    /// Blob contains all of `needles`
    pub fn contains_all<I, S>(needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::ContainsAll(needles.into_iter().map(Into::into).collect())
    }

    /// Item carries `tag`
    pub fn has_tag(tag: impl Into<String>) -> Self {
        Predicate::HasTag(tag.into())
    }

    /// Item carries any of `tags`
    pub fn any_tag<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::AnyTag(tags.into_iter().map(Into::into).collect())
    }

    /// Logical or
    pub fn any(predicates: Vec<Predicate>) -> Self {
        Predicate::Any(predicates)
    }

    /// Logical and
    pub fn all(predicates: Vec<Predicate>) -> Self {
        Predicate::All(predicates)
    }

    /// Logical not
    pub fn not(predicate: Predicate) -> Self {
        Predicate::Not(Box::new(predicate))
    }

    /// Evaluate against normalized search text
    pub fn matches(&self, text: &SearchText) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::Contains(needle) => text.contains(needle),
            Predicate::ContainsAny(needles) => needles.iter().any(|n| text.contains(n)),
            Predicate::ContainsAll(needles) => needles.iter().all(|n| text.contains(n)),
            Predicate::HasTag(tag) => text.has_tag(tag),
            Predicate::AnyTag(tags) => tags.iter().any(|t| text.has_tag(t)),
            Predicate::Any(predicates) => predicates.iter().any(|p| p.matches(text)),
            Predicate::All(predicates) => predicates.iter().all(|p| p.matches(text)),
            Predicate::Not(predicate) => !predicate.matches(text),
        }
    }

    /// Lowercase every needle and tag
    fn normalized(self) -> Self {
        fn lower(values: Vec<String>) -> Vec<String> {
            values.into_iter().map(|v| v.to_lowercase()).collect()
        }

        match self {
            Predicate::Always => Predicate::Always,
            Predicate::Contains(needle) => Predicate::Contains(needle.to_lowercase()),
            Predicate::ContainsAny(needles) => Predicate::ContainsAny(lower(needles)),
            Predicate::ContainsAll(needles) => Predicate::ContainsAll(lower(needles)),
            Predicate::HasTag(tag) => Predicate::HasTag(tag.to_lowercase()),
            Predicate::AnyTag(tags) => Predicate::AnyTag(lower(tags)),
            Predicate::Any(predicates) => {
                Predicate::Any(predicates.into_iter().map(Self::normalized).collect())
            }
            Predicate::All(predicates) => {
                Predicate::All(predicates.into_iter().map(Self::normalized).collect())
            }
            Predicate::Not(predicate) => Predicate::Not(Box::new(predicate.normalized())),
        }
    }
}

/// One predicate → topic key rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Condition that makes the rule fire
    pub predicate: Predicate,

    /// Catalog key resolved when the rule fires
    pub topic: String,
}

impl Rule {
    /// Create a rule, normalizing the predicate
    pub fn new(predicate: Predicate, topic: impl Into<String>) -> Self {
        Self {
            predicate: predicate.normalized(),
            topic: topic.into(),
        }
    }

    /// Whether the rule fires for the text
    pub fn matches(&self, text: &SearchText) -> bool {
        self.predicate.matches(text)
    }
}

/// Ordered rules for one content kind
///
/// Declaration order is precedence: earlier rules claim earlier positions in
/// the result, so broad topics go before the specific methods they contain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleBattery {
    rules: Vec<Rule>,
}

impl RuleBattery {
    /// Create an empty battery
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule (builder style)
    pub fn rule(mut self, predicate: Predicate, topic: impl Into<String>) -> Self {
        self.push(Rule::new(predicate, topic));
        self
    }

    /// Append a rule
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Rules in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the battery has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

//! Template entry model.
//!
//! # Responsibility
//! - Hold one template payload together with the tags it answers for.
//! - Validate tag-set invariants before an entry enters a catalog.
//!
//! # Invariants
//! - No tag appears twice within one entry, after normalization.
//! - The payload is opaque; core never inspects its content.
//! - Keys beside `tags` and `payload` survive a load/save cycle untouched.

use crate::model::combination::{document_tag, normalize_tag, Combination};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Tag-set validation errors for `TemplateEntry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    /// The entry carries no tags where at least one was required.
    EmptyTags,
    /// A tag appears twice (the sentinel and the empty string count as equal).
    DuplicateTag(String),
    /// A synthesized entry carried a number of tags other than one.
    ExpectedSingleTag { event: String, count: usize },
    /// A synthesized entry covers a different tag than it was generated for.
    UnexpectedTag {
        event: String,
        expected: String,
        found: String,
    },
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTags => write!(f, "template entry has no tags"),
            Self::DuplicateTag(tag) => write!(f, "template entry repeats tag `{tag}`"),
            Self::ExpectedSingleTag { event, count } => write!(
                f,
                "synthesized entry for `{event}` must carry exactly one tag, got {count}"
            ),
            Self::UnexpectedTag {
                event,
                expected,
                found,
            } => write!(
                f,
                "synthesized entry for `{event}` covers tag `{found}` instead of `{expected}`"
            ),
        }
    }
}

impl Error for EntryValidationError {}

/// One template payload and the tags it covers.
///
/// Tags keep their document spelling so a load/save cycle does not rewrite
/// them; use `normalized_tags` for any comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Missing in a document means the entry covers nothing.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
    /// Document keys this model does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TemplateEntry {
    /// Creates a validated entry with a non-empty, duplicate-free tag set.
    pub fn new(tags: Vec<String>, payload: Value) -> Result<Self, EntryValidationError> {
        let entry = Self {
            tags,
            payload,
            ..Self::default()
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Creates an entry covering exactly one tag; the empty tag is written as the sentinel.
    pub fn for_tag(tag: &str, payload: Value) -> Self {
        Self {
            tags: vec![document_tag(normalize_tag(tag)).to_string()],
            payload,
            extra: Map::new(),
        }
    }

    /// Requires a non-empty tag set with no duplicates.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.tags.is_empty() {
            return Err(EntryValidationError::EmptyTags);
        }
        self.check_unique_tags()
    }

    /// Requires no duplicate tags; an empty tag set is accepted.
    pub fn check_unique_tags(&self) -> Result<(), EntryValidationError> {
        let mut seen = BTreeSet::new();
        for tag in &self.tags {
            if !seen.insert(normalize_tag(tag)) {
                return Err(EntryValidationError::DuplicateTag(tag.clone()));
            }
        }
        Ok(())
    }

    /// Tags in normalized form, in document order.
    pub fn normalized_tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.tags.iter().map(|tag| normalize_tag(tag))
    }

    /// Combinations this entry covers when filed under `event`.
    pub fn combinations<'a>(&'a self, event: &'a str) -> impl Iterator<Item = Combination> + 'a {
        self.normalized_tags()
            .map(move |tag| Combination::new(event, tag))
    }

    /// Returns whether the entry covers at least one combination.
    pub fn is_tagged(&self) -> bool {
        !self.tags.is_empty()
    }

    /// Returns whether any tag of this entry is in `tags` (normalized form).
    pub fn overlaps(&self, tags: &BTreeSet<String>) -> bool {
        self.normalized_tags().any(|tag| tags.contains(tag))
    }
}

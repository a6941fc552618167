//! Event/tag identifiers and the combination unit of coverage.
//!
//! # Responsibility
//! - Define `Combination`, the (event, tag) pair compared across documents.
//! - Own the default-tag normalization used by every set operation.
//!
//! # Invariants
//! - The sentinel spelling `default` and the empty string are one logical tag.
//! - A `Combination` always stores its tag in normalized form.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Document spelling of the default tag.
pub const DEFAULT_TAG_SENTINEL: &str = "default";

/// Ordered set of combinations. Ordering keeps reports deterministic.
pub type CombinationSet = BTreeSet<Combination>;

/// Maps the sentinel spelling to the empty string; any other tag is returned as-is.
///
/// Idempotent: `normalize_tag(normalize_tag(t)) == normalize_tag(t)`.
pub fn normalize_tag(tag: &str) -> &str {
    if tag == DEFAULT_TAG_SENTINEL {
        ""
    } else {
        tag
    }
}

/// Maps a normalized tag back to the spelling written into documents.
pub fn document_tag(tag: &str) -> &str {
    if tag.is_empty() {
        DEFAULT_TAG_SENTINEL
    } else {
        tag
    }
}

/// One (event, tag) pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Combination {
    event: String,
    tag: String,
}

impl Combination {
    /// Creates a combination, normalizing the tag.
    pub fn new(event: impl Into<String>, tag: &str) -> Self {
        Self {
            event: event.into(),
            tag: normalize_tag(tag).to_string(),
        }
    }

    /// Shorthand for the default-tag combination of `event`.
    pub fn default_for(event: impl Into<String>) -> Self {
        Self::new(event, "")
    }

    pub fn event(&self) -> &str {
        self.event.as_str()
    }

    /// Normalized tag; empty for the default variant.
    pub fn tag(&self) -> &str {
        self.tag.as_str()
    }

    pub fn is_default(&self) -> bool {
        self.tag.is_empty()
    }
}

impl Display for Combination {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_default() {
            write!(f, "{}:(default)", self.event)
        } else {
            write!(f, "{}:{}", self.event, self.tag)
        }
    }
}

//! Cross-locale catalog comparison.
//!
//! Reports what a secondary catalog lacks relative to a primary one,
//! independent of the taxonomy.

use crate::model::catalog::Catalog;
use crate::model::combination::document_tag;

/// Tags (document spelling) that one event is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventGap {
    pub event: String,
    pub tags: Vec<String>,
}

/// Differences of a secondary catalog relative to a primary catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleGaps {
    /// Events absent from the secondary catalog, with all primary tags.
    pub missing_events: Vec<EventGap>,
    /// Events present in both whose secondary tag set lacks some primary tags.
    pub partial_events: Vec<EventGap>,
}

impl LocaleGaps {
    pub fn is_empty(&self) -> bool {
        self.missing_events.is_empty() && self.partial_events.is_empty()
    }
}

/// Lists events and tags covered by `primary` but not by `secondary`.
///
/// Tags are compared in normalized form, so a `default` entry in one catalog
/// and an `""` entry in the other cover the same combination.
pub fn compare_catalogs(primary: &Catalog, secondary: &Catalog) -> LocaleGaps {
    let mut gaps = LocaleGaps::default();
    for (event, _) in primary.events() {
        let primary_tags = primary.covered_tags(event);
        if !secondary.contains_event(event) {
            gaps.missing_events.push(EventGap {
                event: event.to_string(),
                tags: to_document_tags(primary_tags.iter()),
            });
            continue;
        }

        let secondary_tags = secondary.covered_tags(event);
        let lacking = primary_tags.difference(&secondary_tags).collect::<Vec<_>>();
        if !lacking.is_empty() {
            gaps.partial_events.push(EventGap {
                event: event.to_string(),
                tags: to_document_tags(lacking.into_iter()),
            });
        }
    }
    gaps
}

fn to_document_tags<'a>(tags: impl Iterator<Item = &'a String>) -> Vec<String> {
    tags.map(|tag| document_tag(tag).to_string()).collect()
}

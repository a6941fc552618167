//! Canonical event taxonomy.
//!
//! # Responsibility
//! - Hold the valid tags per event as declared by the event schema.
//! - Derive the expected combination set every catalog is measured against.
//!
//! # Invariants
//! - An event with no declared tags expects exactly the default combination.

use crate::model::combination::{Combination, CombinationSet};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    events: BTreeMap<String, Vec<String>>,
}

impl Taxonomy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `event` with `tags`; an empty list means default tag only.
    pub fn insert(&mut self, event: impl Into<String>, tags: Vec<String>) {
        self.events.insert(event.into(), tags);
    }

    pub fn tags(&self, event: &str) -> Option<&[String]> {
        self.events.get(event).map(Vec::as_slice)
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn events(&self) -> impl Iterator<Item = &str> + '_ {
        self.events.keys().map(String::as_str)
    }

    /// All combinations the taxonomy requires a catalog to cover.
    pub fn expected_combinations(&self) -> CombinationSet {
        let mut expected = CombinationSet::new();
        for (event, tags) in &self.events {
            if tags.is_empty() {
                expected.insert(Combination::default_for(event.as_str()));
                continue;
            }
            for tag in tags {
                expected.insert(Combination::new(event.as_str(), tag));
            }
        }
        expected
    }
}

impl<E: Into<String>> FromIterator<(E, Vec<String>)> for Taxonomy {
    fn from_iter<T: IntoIterator<Item = (E, Vec<String>)>>(iter: T) -> Self {
        let mut taxonomy = Self::new();
        for (event, tags) in iter {
            taxonomy.insert(event, tags);
        }
        taxonomy
    }
}

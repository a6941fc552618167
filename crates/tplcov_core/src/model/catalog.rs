//! Locale catalog model and its flattened coverage view.
//!
//! # Responsibility
//! - Map each event to its ordered list of template entries.
//! - Flatten a catalog into the combination set it covers.
//!
//! # Invariants
//! - Entry order under an event is preserved exactly as loaded or merged.
//! - `combinations()` is independent of entry order.
//! - Event-level keys beside `payloads` are carried through unchanged.

use crate::model::combination::{Combination, CombinationSet};
use crate::model::entry::TemplateEntry;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Document shape of one event: `{ "payloads": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventTemplates {
    pub payloads: Vec<TemplateEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Event-keyed template catalog for one locale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, EventTemplates>",
    into = "BTreeMap<String, EventTemplates>"
)]
pub struct Catalog {
    events: BTreeMap<String, Vec<TemplateEntry>>,
    /// Non-empty event-level extras only.
    event_fields: BTreeMap<String, Map<String, Value>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry` to the end of `event`'s list, creating the event if needed.
    pub fn push_entry(&mut self, event: impl Into<String>, entry: TemplateEntry) {
        self.events.entry(event.into()).or_default().push(entry);
    }

    /// Replaces the entry list of `event`.
    pub fn set_entries(&mut self, event: impl Into<String>, entries: Vec<TemplateEntry>) {
        self.events.insert(event.into(), entries);
    }

    pub fn entries(&self, event: &str) -> Option<&[TemplateEntry]> {
        self.events.get(event).map(Vec::as_slice)
    }

    /// Event-level document keys other than `payloads`.
    pub fn event_fields(&self, event: &str) -> Option<&Map<String, Value>> {
        self.event_fields.get(event)
    }

    pub fn set_event_fields(&mut self, event: impl Into<String>, fields: Map<String, Value>) {
        let event = event.into();
        if fields.is_empty() {
            self.event_fields.remove(&event);
        } else {
            self.event_fields.insert(event, fields);
        }
    }

    pub fn contains_event(&self, event: &str) -> bool {
        self.events.contains_key(event)
    }

    /// Events in ascending name order.
    pub fn events(&self) -> impl Iterator<Item = (&str, &[TemplateEntry])> + '_ {
        self.events
            .iter()
            .map(|(event, entries)| (event.as_str(), entries.as_slice()))
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn entry_count(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Every (event, normalized tag) pair covered by any entry.
    pub fn combinations(&self) -> CombinationSet {
        self.events
            .iter()
            .flat_map(|(event, entries)| {
                entries
                    .iter()
                    .flat_map(move |entry| entry.combinations(event.as_str()))
            })
            .collect()
    }

    /// Normalized tags covered under `event`; empty when the event is absent.
    pub fn covered_tags(&self, event: &str) -> BTreeSet<String> {
        self.events
            .get(event)
            .into_iter()
            .flatten()
            .flat_map(|entry| entry.normalized_tags().map(str::to_string))
            .collect()
    }
}

impl From<BTreeMap<String, EventTemplates>> for Catalog {
    fn from(value: BTreeMap<String, EventTemplates>) -> Self {
        let mut catalog = Self::new();
        for (event, templates) in value {
            catalog.set_event_fields(event.as_str(), templates.extra);
            catalog.events.insert(event, templates.payloads);
        }
        catalog
    }
}

impl From<Catalog> for BTreeMap<String, EventTemplates> {
    fn from(mut value: Catalog) -> Self {
        value
            .events
            .into_iter()
            .map(|(event, payloads)| {
                let extra = value.event_fields.remove(&event).unwrap_or_default();
                (event, EventTemplates { payloads, extra })
            })
            .collect()
    }
}

impl FromIterator<(Combination, TemplateEntry)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (Combination, TemplateEntry)>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for (combination, entry) in iter {
            catalog.push_entry(combination.event(), entry);
        }
        catalog
    }
}

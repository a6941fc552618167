use crate::model::catalog::Catalog;
use log::debug;
use std::collections::BTreeSet;

/// Entry counts produced by one merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Entries carried over from the primary catalog.
    pub retained: usize,
    /// Candidate entries appended to the result.
    pub added: usize,
    /// Candidate entries dropped because a tag was already covered.
    pub rejected: usize,
}

impl MergeStats {
    /// Entries in the merged catalog.
    pub fn total(&self) -> usize {
        self.retained + self.added
    }
}

/// Merged catalog plus the statistics describing how it was built.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub catalog: Catalog,
    pub stats: MergeStats,
}

/// Merges `candidates` into `primary`.
///
/// A candidate entry is appended only when it carries at least one tag and
/// none of its tags is already covered by the primary entries of its event;
/// otherwise it is rejected wholesale, even if some of its other tags are new.
/// Events new to `primary` take the candidate's event-level keys with them.
pub fn merge_catalogs(primary: &Catalog, candidates: &Catalog) -> MergeOutcome {
    let mut merged = primary.clone();
    let mut stats = MergeStats {
        retained: primary.entry_count(),
        ..MergeStats::default()
    };

    for (event, entries) in candidates.events() {
        let existing_tags: BTreeSet<String> = primary.covered_tags(event);
        for entry in entries {
            if !entry.is_tagged() || entry.overlaps(&existing_tags) {
                debug!(
                    "event=merge_reject module=merge status=ok event_name={} tags={:?}",
                    event, entry.tags
                );
                stats.rejected += 1;
                continue;
            }
            merged.push_entry(event, entry.clone());
            stats.added += 1;
        }

        if !primary.contains_event(event) && merged.contains_event(event) {
            if let Some(fields) = candidates.event_fields(event) {
                merged.set_event_fields(event, fields.clone());
            }
        }
    }

    MergeOutcome {
        catalog: merged,
        stats,
    }
}

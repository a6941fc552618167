//! Placeholder template synthesis for uncovered combinations.
//!
//! # Responsibility
//! - Define the `TemplateSynthesizer` seam consumed by the batch operations.
//! - Turn a missing combination set into a candidate catalog per locale.
//!
//! # Invariants
//! - Each candidate entry covers exactly the combination it was built for.
//! - Candidate catalogs are ordered by event, then tag.

pub mod card;
pub mod rules;

use crate::model::catalog::Catalog;
use crate::model::combination::{normalize_tag, CombinationSet};
use crate::model::entry::{EntryValidationError, TemplateEntry};
use crate::model::locale::Locale;
use log::debug;

pub use card::CardSynthesizer;

/// Produces a candidate entry for one (event, tag, locale) triple.
pub trait TemplateSynthesizer {
    /// `tag` is normalized; empty means the default variant.
    fn synthesize(&self, event: &str, tag: &str, locale: Locale) -> TemplateEntry;
}

/// Synthesizes one entry per missing combination, grouped by event.
///
/// # Errors
/// - `ExpectedSingleTag` when the synthesizer returns an entry whose tag set
///   is not exactly one tag.
/// - `UnexpectedTag` when that tag differs from the requested one.
pub fn synthesize_candidates<S: TemplateSynthesizer + ?Sized>(
    synthesizer: &S,
    missing: &CombinationSet,
    locale: Locale,
) -> Result<Catalog, EntryValidationError> {
    let mut candidates = Catalog::new();
    for combination in missing {
        let entry = synthesizer.synthesize(combination.event(), combination.tag(), locale);
        if entry.tags.len() != 1 {
            return Err(EntryValidationError::ExpectedSingleTag {
                event: combination.event().to_string(),
                count: entry.tags.len(),
            });
        }
        let found = normalize_tag(&entry.tags[0]);
        if found != combination.tag() {
            return Err(EntryValidationError::UnexpectedTag {
                event: combination.event().to_string(),
                expected: combination.tag().to_string(),
                found: found.to_string(),
            });
        }
        debug!(
            "event=synthesize_entry module=synth status=ok locale={} combination={}",
            locale, combination
        );
        candidates.push_entry(combination.event(), entry);
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::{synthesize_candidates, TemplateSynthesizer};
    use crate::model::combination::{Combination, CombinationSet};
    use crate::model::entry::{EntryValidationError, TemplateEntry};
    use crate::model::locale::Locale;
    use serde_json::json;

    struct DoubleTag;

    impl TemplateSynthesizer for DoubleTag {
        fn synthesize(&self, _event: &str, tag: &str, _locale: Locale) -> TemplateEntry {
            TemplateEntry {
                tags: vec![tag.to_string(), "extra".to_string()],
                payload: json!({}),
                ..TemplateEntry::default()
            }
        }
    }

    struct WrongTag;

    impl TemplateSynthesizer for WrongTag {
        fn synthesize(&self, _event: &str, _tag: &str, _locale: Locale) -> TemplateEntry {
            TemplateEntry::for_tag("other", json!({}))
        }
    }

    fn missing() -> CombinationSet {
        [Combination::new("issues", "closed")].into_iter().collect()
    }

    #[test]
    fn rejects_entries_with_more_than_one_tag() {
        let err = synthesize_candidates(&DoubleTag, &missing(), Locale::English).unwrap_err();
        assert_eq!(
            err,
            EntryValidationError::ExpectedSingleTag {
                event: "issues".to_string(),
                count: 2,
            }
        );
    }

    #[test]
    fn rejects_entries_for_a_different_tag() {
        let err = synthesize_candidates(&WrongTag, &missing(), Locale::English).unwrap_err();
        assert!(matches!(err, EntryValidationError::UnexpectedTag { .. }));
    }
}

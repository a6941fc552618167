//! Missing/extra set algebra and coverage ratio.

use crate::model::combination::{Combination, CombinationSet};
use std::collections::BTreeMap;

/// Combinations the taxonomy requires but the catalog does not cover.
pub fn missing(expected: &CombinationSet, actual: &CombinationSet) -> CombinationSet {
    expected.difference(actual).cloned().collect()
}

/// Combinations present in the catalog but not defined by the taxonomy.
pub fn extra(expected: &CombinationSet, actual: &CombinationSet) -> CombinationSet {
    actual.difference(expected).cloned().collect()
}

/// `100 * |expected ∩ actual| / |expected|`, or 0 when nothing is expected.
pub fn coverage_percent(expected: &CombinationSet, actual: &CombinationSet) -> f64 {
    if expected.is_empty() {
        return 0.0;
    }
    let covered = expected.intersection(actual).count();
    100.0 * covered as f64 / expected.len() as f64
}

/// Groups combinations by event for display; tags stay in ascending order.
pub fn group_by_event<'a, I>(combinations: I) -> BTreeMap<&'a str, Vec<&'a str>>
where
    I: IntoIterator<Item = &'a Combination>,
{
    let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for combination in combinations {
        grouped
            .entry(combination.event())
            .or_default()
            .push(combination.tag());
    }
    for tags in grouped.values_mut() {
        tags.sort_unstable();
    }
    grouped
}

/// Coverage of one catalog against the expected combination set.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    pub expected_count: usize,
    pub actual_count: usize,
    pub covered_count: usize,
    pub missing: CombinationSet,
    pub extra: CombinationSet,
    pub percent: f64,
}

impl CoverageReport {
    pub fn analyze(expected: &CombinationSet, actual: &CombinationSet) -> Self {
        Self {
            expected_count: expected.len(),
            actual_count: actual.len(),
            covered_count: expected.intersection(actual).count(),
            missing: missing(expected, actual),
            extra: extra(expected, actual),
            percent: coverage_percent(expected, actual),
        }
    }

    /// True when every expected combination is covered.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn missing_by_event(&self) -> BTreeMap<&str, Vec<&str>> {
        group_by_event(&self.missing)
    }

    pub fn extra_by_event(&self) -> BTreeMap<&str, Vec<&str>> {
        group_by_event(&self.extra)
    }
}

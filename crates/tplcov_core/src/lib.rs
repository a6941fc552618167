//! Core logic for template catalog coverage.
//! This crate is the single source of truth for coverage and merge invariants.

pub mod config;
pub mod coverage;
pub mod document;
pub mod logging;
pub mod merge;
pub mod model;
pub mod repo;
pub mod service;
pub mod synth;

pub use config::{LocalePaths, ProjectLayout};
pub use coverage::analyzer::{coverage_percent, extra, group_by_event, missing, CoverageReport};
pub use coverage::compare::{compare_catalogs, EventGap, LocaleGaps};
pub use document::{DocumentError, DocumentResult};
pub use logging::{default_log_level, init_logging, logging_status, LogDestination};
pub use merge::{merge_catalogs, MergeOutcome, MergeStats};
pub use model::catalog::Catalog;
pub use model::combination::{normalize_tag, Combination, CombinationSet, DEFAULT_TAG_SENTINEL};
pub use model::entry::{EntryValidationError, TemplateEntry};
pub use model::locale::Locale;
pub use model::taxonomy::Taxonomy;
pub use repo::catalog_repo::{CatalogRepository, FileCatalogRepository};
pub use service::coverage_service::{
    resolve_locales, AnalyzeReport, CoverageService, CoverageServiceError, LocaleCoverage,
    LocaleMerge, LocaleSynthesis, ServiceResult,
};
pub use synth::{synthesize_candidates, CardSynthesizer, TemplateSynthesizer};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

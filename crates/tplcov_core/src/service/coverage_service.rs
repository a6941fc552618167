//! Coverage use-case service: analyze, synthesize, merge and compare.
//!
//! # Responsibility
//! - Orchestrate one batch run over the documents of a repository.
//! - Emit one start/ok/error log event per operation with timing.
//!
//! # Invariants
//! - Every document a run needs is loaded and every output computed before
//!   the first write; a failure before that point writes nothing.
//! - Operations are stateless; rerunning converges to a fixed point.

use crate::coverage::analyzer::CoverageReport;
use crate::coverage::compare::{compare_catalogs, LocaleGaps};
use crate::document::DocumentError;
use crate::merge::{merge_catalogs, MergeStats};
use crate::model::catalog::Catalog;
use crate::model::entry::EntryValidationError;
use crate::model::locale::Locale;
use crate::repo::catalog_repo::CatalogRepository;
use crate::synth::{synthesize_candidates, TemplateSynthesizer};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Instant;

/// Service error for coverage use-cases.
#[derive(Debug)]
pub enum CoverageServiceError {
    /// A document could not be read, parsed or written.
    Document(DocumentError),
    /// A synthesized entry violated the single-tag contract.
    Synthesis {
        locale: Locale,
        source: EntryValidationError,
    },
    /// A locale name is not recognized.
    InvalidLocale(String),
}

impl Display for CoverageServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Document(err) => write!(f, "{err}"),
            Self::Synthesis { locale, source } => {
                write!(f, "synthesis failed for locale `{locale}`: {source}")
            }
            Self::InvalidLocale(message) => write!(f, "{message}"),
        }
    }
}

impl Error for CoverageServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Document(err) => Some(err),
            Self::Synthesis { source, .. } => Some(source),
            Self::InvalidLocale(_) => None,
        }
    }
}

impl From<DocumentError> for CoverageServiceError {
    fn from(value: DocumentError) -> Self {
        Self::Document(value)
    }
}

pub type ServiceResult<T> = Result<T, CoverageServiceError>;

/// Parses locale names; an empty list selects every locale. Duplicates collapse.
pub fn resolve_locales<S: AsRef<str>>(names: &[S]) -> ServiceResult<Vec<Locale>> {
    if names.is_empty() {
        return Ok(Locale::ALL.to_vec());
    }
    let mut locales = Vec::with_capacity(names.len());
    for name in names {
        let locale = name
            .as_ref()
            .parse::<Locale>()
            .map_err(CoverageServiceError::InvalidLocale)?;
        if !locales.contains(&locale) {
            locales.push(locale);
        }
    }
    Ok(locales)
}

/// Coverage of one locale catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleCoverage {
    pub locale: Locale,
    pub catalog: PathBuf,
    pub report: CoverageReport,
}

/// Result of an analyze run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeReport {
    pub taxonomy_events: usize,
    pub expected_count: usize,
    pub locales: Vec<LocaleCoverage>,
}

impl AnalyzeReport {
    /// True when no analyzed locale has missing combinations.
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(|coverage| coverage.report.is_complete())
    }
}

/// Result of synthesizing one locale's candidate document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSynthesis {
    pub locale: Locale,
    pub output: PathBuf,
    pub entries: usize,
    /// False when nothing was missing and no file was written.
    pub written: bool,
}

/// Result of merging one locale's candidate document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleMerge {
    pub locale: Locale,
    pub catalog: PathBuf,
    pub stats: MergeStats,
}

/// Coverage service facade over repository implementations.
pub struct CoverageService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> CoverageService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Measures each locale catalog against the taxonomy.
    pub fn analyze(&self, locales: &[Locale]) -> ServiceResult<AnalyzeReport> {
        run_logged("analyze", || {
            let taxonomy = self.repo.load_taxonomy()?;
            let expected = taxonomy.expected_combinations();

            let mut coverages = Vec::with_capacity(locales.len());
            for &locale in locales {
                let actual = self.repo.load_catalog(locale)?.combinations();
                let report = CoverageReport::analyze(&expected, &actual);
                info!(
                    "event=coverage module=service status=ok locale={} expected={} covered={} missing={} extra={}",
                    locale,
                    report.expected_count,
                    report.covered_count,
                    report.missing.len(),
                    report.extra.len()
                );
                coverages.push(LocaleCoverage {
                    locale,
                    catalog: self.repo.catalog_location(locale),
                    report,
                });
            }

            Ok(AnalyzeReport {
                taxonomy_events: taxonomy.event_count(),
                expected_count: expected.len(),
                locales: coverages,
            })
        })
    }

    /// Writes one candidate document per locale with an entry for every
    /// missing combination. Locales with nothing missing are skipped.
    pub fn synthesize<S: TemplateSynthesizer + ?Sized>(
        &self,
        locales: &[Locale],
        synthesizer: &S,
    ) -> ServiceResult<Vec<LocaleSynthesis>> {
        run_logged("synthesize", || {
            let expected = self.repo.load_taxonomy()?.expected_combinations();

            let mut planned: Vec<(Locale, Catalog)> = Vec::with_capacity(locales.len());
            for &locale in locales {
                let actual = self.repo.load_catalog(locale)?.combinations();
                let missing = CoverageReport::analyze(&expected, &actual).missing;
                let candidates = synthesize_candidates(synthesizer, &missing, locale)
                    .map_err(|source| CoverageServiceError::Synthesis { locale, source })?;
                planned.push((locale, candidates));
            }

            let mut results = Vec::with_capacity(planned.len());
            for (locale, candidates) in planned {
                let written = !candidates.is_empty();
                if written {
                    self.repo.save_candidates(locale, &candidates)?;
                }
                results.push(LocaleSynthesis {
                    locale,
                    output: self.repo.candidates_location(locale),
                    entries: candidates.entry_count(),
                    written,
                });
            }
            Ok(results)
        })
    }

    /// Merges each locale's candidate document into its catalog and
    /// overwrites the catalog.
    pub fn merge(&self, locales: &[Locale]) -> ServiceResult<Vec<LocaleMerge>> {
        run_logged("merge", || {
            let mut planned = Vec::with_capacity(locales.len());
            for &locale in locales {
                let primary = self.repo.load_catalog(locale)?;
                let candidates = self.repo.load_candidates(locale)?;
                planned.push((locale, merge_catalogs(&primary, &candidates)));
            }

            let mut results = Vec::with_capacity(planned.len());
            for (locale, outcome) in planned {
                self.repo.save_catalog(locale, &outcome.catalog)?;
                info!(
                    "event=merge module=service status=ok locale={} retained={} added={} rejected={} total={}",
                    locale,
                    outcome.stats.retained,
                    outcome.stats.added,
                    outcome.stats.rejected,
                    outcome.stats.total()
                );
                results.push(LocaleMerge {
                    locale,
                    catalog: self.repo.catalog_location(locale),
                    stats: outcome.stats,
                });
            }
            Ok(results)
        })
    }

    /// Lists what `secondary`'s catalog lacks relative to `primary`'s.
    pub fn compare(&self, primary: Locale, secondary: Locale) -> ServiceResult<LocaleGaps> {
        run_logged("compare", || {
            let primary_catalog = self.repo.load_catalog(primary)?;
            let secondary_catalog = self.repo.load_catalog(secondary)?;
            Ok(compare_catalogs(&primary_catalog, &secondary_catalog))
        })
    }
}

fn run_logged<T>(operation: &str, run: impl FnOnce() -> ServiceResult<T>) -> ServiceResult<T> {
    let started_at = Instant::now();
    info!("event={} module=service status=start", operation);
    let result = run();
    match &result {
        Ok(_) => info!(
            "event={} module=service status=ok duration_ms={}",
            operation,
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event={} module=service status=error duration_ms={} error={}",
            operation,
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

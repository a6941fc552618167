//! Catalog repository contract and file-backed implementation.
//!
//! # Responsibility
//! - Give the service layer locale-addressed access to documents.
//! - Keep path resolution and file formats inside the document boundary.
//!
//! # Invariants
//! - Reads return fully validated model types or an error naming the path.
//! - Writes replace a document atomically.

use crate::config::ProjectLayout;
use crate::document::{
    load_catalog, load_taxonomy, write_candidates, write_catalog, DocumentResult,
};
use crate::model::catalog::Catalog;
use crate::model::locale::Locale;
use crate::model::taxonomy::Taxonomy;
use std::path::PathBuf;

/// Document access used by the coverage service.
pub trait CatalogRepository {
    fn load_taxonomy(&self) -> DocumentResult<Taxonomy>;
    fn load_catalog(&self, locale: Locale) -> DocumentResult<Catalog>;
    fn load_candidates(&self, locale: Locale) -> DocumentResult<Catalog>;
    fn save_catalog(&self, locale: Locale, catalog: &Catalog) -> DocumentResult<()>;
    fn save_candidates(&self, locale: Locale, candidates: &Catalog) -> DocumentResult<()>;
    /// Human-readable location of the locale catalog, for reports.
    fn catalog_location(&self, locale: Locale) -> PathBuf;
    /// Human-readable location of the locale candidate document, for reports.
    fn candidates_location(&self, locale: Locale) -> PathBuf;
}

/// Repository reading and writing documents under a `ProjectLayout`.
pub struct FileCatalogRepository {
    layout: ProjectLayout,
}

impl FileCatalogRepository {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }
}

impl CatalogRepository for FileCatalogRepository {
    fn load_taxonomy(&self) -> DocumentResult<Taxonomy> {
        load_taxonomy(&self.layout.taxonomy)
    }

    fn load_catalog(&self, locale: Locale) -> DocumentResult<Catalog> {
        load_catalog(&self.layout.locale(locale).catalog)
    }

    fn load_candidates(&self, locale: Locale) -> DocumentResult<Catalog> {
        load_catalog(&self.layout.locale(locale).candidates)
    }

    fn save_catalog(&self, locale: Locale, catalog: &Catalog) -> DocumentResult<()> {
        write_catalog(&self.layout.locale(locale).catalog, catalog, locale)
    }

    fn save_candidates(&self, locale: Locale, candidates: &Catalog) -> DocumentResult<()> {
        write_candidates(&self.layout.locale(locale).candidates, candidates)
    }

    fn catalog_location(&self, locale: Locale) -> PathBuf {
        self.layout.locale(locale).catalog.clone()
    }

    fn candidates_location(&self, locale: Locale) -> PathBuf {
        self.layout.locale(locale).candidates.clone()
    }
}

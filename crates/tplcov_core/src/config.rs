//! File layout of a template project.
//!
//! # Responsibility
//! - Resolve the taxonomy, catalog and candidate paths used by batch runs.
//!
//! # Invariants
//! - Every locale has exactly one catalog path and one candidate path.

use crate::model::locale::Locale;
use std::path::{Path, PathBuf};

pub const TAXONOMY_FILE: &str = "events.yaml";

/// Catalog and candidate document paths of one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalePaths {
    pub catalog: PathBuf,
    pub candidates: PathBuf,
}

impl LocalePaths {
    fn in_dir(dir: &Path, locale: Locale) -> Self {
        let catalog = match locale {
            Locale::English => "templates.jsonc".to_string(),
            other => format!("templates.{}.jsonc", other.code()),
        };
        Self {
            catalog: dir.join(catalog),
            candidates: dir.join(format!("generated_missing_templates_{}.json", locale.code())),
        }
    }
}

/// Paths of every document a batch run reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub taxonomy: PathBuf,
    english: LocalePaths,
    chinese: LocalePaths,
}

impl ProjectLayout {
    /// Conventional layout with every document inside `dir`.
    pub fn from_config_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            taxonomy: dir.join(TAXONOMY_FILE),
            english: LocalePaths::in_dir(dir, Locale::English),
            chinese: LocalePaths::in_dir(dir, Locale::Chinese),
        }
    }

    pub fn with_taxonomy(mut self, path: impl Into<PathBuf>) -> Self {
        self.taxonomy = path.into();
        self
    }

    pub fn with_locale_paths(mut self, locale: Locale, paths: LocalePaths) -> Self {
        *self.locale_mut(locale) = paths;
        self
    }

    pub fn locale(&self, locale: Locale) -> &LocalePaths {
        match locale {
            Locale::English => &self.english,
            Locale::Chinese => &self.chinese,
        }
    }

    fn locale_mut(&mut self, locale: Locale) -> &mut LocalePaths {
        match locale {
            Locale::English => &mut self.english,
            Locale::Chinese => &mut self.chinese,
        }
    }
}

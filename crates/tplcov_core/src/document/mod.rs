//! Document I/O for taxonomy, catalog and candidate files.
//!
//! # Responsibility
//! - Parse persisted documents into validated model types at load time.
//! - Serialize catalogs back to disk without partial writes.
//!
//! # Invariants
//! - Core algorithms never see untyped document trees.
//! - Every error names the offending path.
//!
//! # See also
//! - `crate::service::coverage_service` for the operations that drive loading and writing.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

mod jsonc;
mod loader;
mod writer;

pub use jsonc::strip_comments;
pub use loader::{load_catalog, load_taxonomy, parse_catalog_str, parse_taxonomy_str};
pub use writer::{render_candidates, render_catalog, write_candidates, write_catalog};

/// Top-level key that optionally wraps the event mapping of a catalog.
pub const TEMPLATES_KEY: &str = "templates";

pub type DocumentResult<T> = Result<T, DocumentError>;

#[derive(Debug)]
pub enum DocumentError {
    /// A referenced document does not exist.
    MissingFile { path: PathBuf },
    /// Reading or writing the document failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The document is not well-formed after comment stripping.
    Parse { path: PathBuf, message: String },
    /// The document is well-formed but violates the expected shape.
    Schema { path: PathBuf, message: String },
}

impl DocumentError {
    pub fn path(&self) -> &Path {
        match self {
            Self::MissingFile { path }
            | Self::Io { path, .. }
            | Self::Parse { path, .. }
            | Self::Schema { path, .. } => path.as_path(),
        }
    }

    fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::MissingFile {
                path: path.to_path_buf(),
            };
        }
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn parse(path: &Path, message: impl Display) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    fn schema(path: &Path, message: impl Display) -> Self {
        Self::Schema {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFile { path } => write!(f, "document not found: `{}`", path.display()),
            Self::Io { path, source } => write!(f, "I/O error on `{}`: {source}", path.display()),
            Self::Parse { path, message } => {
                write!(f, "failed to parse `{}`: {message}", path.display())
            }
            Self::Schema { path, message } => {
                write!(f, "invalid document `{}`: {message}", path.display())
            }
        }
    }
}

impl Error for DocumentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

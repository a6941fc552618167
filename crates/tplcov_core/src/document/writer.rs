//! Catalog and candidate document writers.

use super::{DocumentError, DocumentResult, TEMPLATES_KEY};
use crate::model::catalog::Catalog;
use crate::model::locale::Locale;
use log::{error, info};
use serde_json::{Map, Value};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Renders a catalog as JSONC: a locale comment header, then the pretty JSON body.
pub fn render_catalog(catalog: &Catalog, locale: Locale) -> Result<String, serde_json::Error> {
    let mut rendered = String::new();
    for line in locale.catalog_header() {
        rendered.push_str("// ");
        rendered.push_str(line);
        rendered.push('\n');
    }
    rendered.push('\n');
    rendered.push_str(&render_candidates(catalog)?);
    Ok(rendered)
}

/// Renders a catalog as plain JSON nested under `templates`.
pub fn render_candidates(catalog: &Catalog) -> Result<String, serde_json::Error> {
    let mut root = Map::new();
    root.insert(TEMPLATES_KEY.to_string(), serde_json::to_value(catalog)?);
    let mut rendered = serde_json::to_string_pretty(&Value::Object(root))?;
    rendered.push('\n');
    Ok(rendered)
}

/// Overwrites `path` with the locale's primary catalog document.
pub fn write_catalog(
    path: impl AsRef<Path>,
    catalog: &Catalog,
    locale: Locale,
) -> DocumentResult<()> {
    let path = path.as_ref();
    let rendered =
        render_catalog(catalog, locale).map_err(|err| DocumentError::schema(path, err))?;
    persist_atomically(path, &rendered, "catalog", catalog)
}

/// Writes a candidate document for later review and merge.
pub fn write_candidates(path: impl AsRef<Path>, catalog: &Catalog) -> DocumentResult<()> {
    let path = path.as_ref();
    let rendered = render_candidates(catalog).map_err(|err| DocumentError::schema(path, err))?;
    persist_atomically(path, &rendered, "candidates", catalog)
}

// The target is replaced by rename, so readers never observe a half-written file.
fn persist_atomically(
    path: &Path,
    contents: &str,
    kind: &str,
    catalog: &Catalog,
) -> DocumentResult<()> {
    let result = write_via_temp_file(path, contents);
    match &result {
        Ok(()) => info!(
            "event=document_write module=document status=ok kind={} path={} events={} items={}",
            kind,
            path.display(),
            catalog.event_count(),
            catalog.entry_count()
        ),
        Err(err) => error!(
            "event=document_write module=document status=error kind={} path={} error={}",
            kind,
            path.display(),
            err
        ),
    }
    result
}

fn write_via_temp_file(path: &Path, contents: &str) -> DocumentResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_err = |err: std::io::Error| DocumentError::Io {
        path: path.to_path_buf(),
        source: err,
    };

    std::fs::create_dir_all(dir).map_err(io_err)?;
    let mut file = NamedTempFile::new_in(dir).map_err(io_err)?;
    file.write_all(contents.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)?;
    file.persist(path).map_err(|err| io_err(err.error))?;
    Ok(())
}

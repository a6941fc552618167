//! Typed loaders for taxonomy (YAML) and catalog (JSONC) documents.

use super::jsonc::strip_comments;
use super::{DocumentError, DocumentResult, TEMPLATES_KEY};
use crate::model::catalog::Catalog;
use crate::model::combination::normalize_tag;
use crate::model::taxonomy::Taxonomy;
use log::{error, info};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TaxonomyDocument {
    events: BTreeMap<String, Option<EventSchema>>,
}

#[derive(Debug, Default, Deserialize)]
struct EventSchema {
    #[serde(default)]
    types: Option<Vec<String>>,
}

/// Loads the event taxonomy from a YAML document.
///
/// # Errors
/// - `MissingFile` when `path` does not exist.
/// - `Parse` when the YAML is malformed or lacks the `events` mapping.
pub fn load_taxonomy(path: impl AsRef<Path>) -> DocumentResult<Taxonomy> {
    let path = path.as_ref();
    let result = read_document(path).and_then(|source| parse_taxonomy_str(&source, path));
    log_load("taxonomy", path, &result, |taxonomy| {
        (taxonomy.event_count(), taxonomy.expected_combinations().len())
    });
    result
}

/// Parses taxonomy YAML; `path` is only used for error reporting.
pub fn parse_taxonomy_str(source: &str, path: &Path) -> DocumentResult<Taxonomy> {
    let document: TaxonomyDocument =
        serde_yaml::from_str(source).map_err(|err| DocumentError::parse(path, err))?;

    Ok(document
        .events
        .into_iter()
        .map(|(event, schema)| {
            let tags = schema
                .unwrap_or_default()
                .types
                .unwrap_or_default()
                .into_iter()
                .map(|tag| normalize_tag(&tag).to_string())
                .collect::<Vec<_>>();
            (event, tags)
        })
        .collect())
}

/// Loads a catalog (or candidate) document, stripping comments first.
///
/// # Errors
/// - `MissingFile` when `path` does not exist.
/// - `Parse` when the content is not valid JSON after comment stripping.
/// - `Schema` when an event lacks `payloads`, the shape is wrong, or an
///   entry repeats a tag.
pub fn load_catalog(path: impl AsRef<Path>) -> DocumentResult<Catalog> {
    let path = path.as_ref();
    let result = read_document(path).and_then(|source| parse_catalog_str(&source, path));
    log_load("catalog", path, &result, |catalog| {
        (catalog.event_count(), catalog.entry_count())
    });
    result
}

/// Parses catalog JSONC; `path` is only used for error reporting.
pub fn parse_catalog_str(source: &str, path: &Path) -> DocumentResult<Catalog> {
    let stripped = strip_comments(source);
    let root: Value =
        serde_json::from_str(&stripped).map_err(|err| DocumentError::parse(path, err))?;

    let events = match root {
        Value::Object(mut map) => match map.remove(TEMPLATES_KEY) {
            Some(inner) => inner,
            None => Value::Object(map),
        },
        other => {
            return Err(DocumentError::schema(
                path,
                format!("top level must be an object, got {}", value_kind(&other)),
            ))
        }
    };

    let catalog: Catalog =
        serde_json::from_value(events).map_err(|err| DocumentError::schema(path, err))?;

    for (event, entries) in catalog.events() {
        for (index, entry) in entries.iter().enumerate() {
            entry.check_unique_tags().map_err(|err| {
                DocumentError::schema(path, format!("event `{event}` payload #{index}: {err}"))
            })?;
        }
    }

    Ok(catalog)
}

fn read_document(path: &Path) -> DocumentResult<String> {
    std::fs::read_to_string(path).map_err(|err| DocumentError::io(path, err))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn log_load<T>(
    kind: &str,
    path: &Path,
    result: &DocumentResult<T>,
    counts: impl FnOnce(&T) -> (usize, usize),
) {
    match result {
        Ok(document) => {
            let (events, items) = counts(document);
            info!(
                "event=document_load module=document status=ok kind={} path={} events={} items={}",
                kind,
                path.display(),
                events,
                items
            );
        }
        Err(err) => {
            error!(
                "event=document_load module=document status=error kind={} path={} error={}",
                kind,
                path.display(),
                err
            );
        }
    }
}

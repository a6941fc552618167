//! Strongly-typed data model for taxonomy and catalog documents.
//!
//! # Responsibility
//! - Define the canonical structures the coverage and merge algorithms run on.
//! - Keep document-level looseness (sentinel tags, optional keys) at the edge.
//!
//! # Invariants
//! - Combinations are always compared in normalized tag form.
//! - Catalogs own their entries; no entry is shared across locales.

pub mod catalog;
pub mod combination;
pub mod entry;
pub mod locale;
pub mod taxonomy;

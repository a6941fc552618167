//! Repository layer over persisted documents.
//!
//! # Responsibility
//! - Define locale-addressed document access contracts.
//! - Isolate file paths and formats from service orchestration.
//!
//! # Invariants
//! - Repository reads return validated model types only.

pub mod catalog_repo;

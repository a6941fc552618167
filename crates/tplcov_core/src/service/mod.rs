//! Service layer for coverage use-cases.
//!
//! # Responsibility
//! - Expose the batch operations callers run: analyze, synthesize, merge, compare.
//! - Delegate document access to repository implementations.
//!
//! # Invariants
//! - Services never touch the file system directly.

pub mod coverage_service;

//! Coverage algebra between a taxonomy and catalogs.
//!
//! # Responsibility
//! - Compute missing/extra combinations and the coverage ratio.
//! - Compare two locale catalogs against each other.
//!
//! # Invariants
//! - All functions are pure; grouping for display never mutates the sets.

pub mod analyzer;
pub mod compare;

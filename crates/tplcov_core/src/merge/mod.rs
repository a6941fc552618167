//! Non-destructive merge of candidate entries into a primary catalog.
//!
//! # Responsibility
//! - Fold candidate entries into a catalog under the overlap-rejection policy.
//! - Report how many entries were retained, added and rejected.
//!
//! # Invariants
//! - Primary entries are never removed, reordered or mutated.
//! - A candidate entry sharing any tag with the primary event is rejected whole.
//! - Merging the same candidates twice adds nothing the second time.

mod merger;

pub use merger::{merge_catalogs, MergeOutcome, MergeStats};

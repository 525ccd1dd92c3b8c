//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to catalog records.

use data_loader::TitleRecord;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across concurrent queries
/// - Candidates are borrowed from the catalog; filters never copy records
/// - Filters take ownership of the Vec and return the retained subset in order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single record passes this predicate
    fn matches(&self, title: &TitleRecord) -> bool;

    /// Apply this filter to a set of candidates, preserving their order.
    fn apply<'a>(&self, candidates: Vec<&'a TitleRecord>) -> Vec<&'a TitleRecord> {
        candidates
            .into_iter()
            .filter(|title| self.matches(title))
            .collect()
    }
}

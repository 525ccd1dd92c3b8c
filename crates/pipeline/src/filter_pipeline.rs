//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{ContentTypeMatchFilter, MinimumYearFilter, SubstringFilter};
use crate::query::{ContentTypeFilter, RecommendationQuery};
use crate::traits::Filter;
use data_loader::TitleRecord;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// A record survives the pipeline iff it passes every filter, so the
/// pipeline is the conjunction of its predicates.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SubstringFilter::genre("Dramas"))
///     .add_filter(MinimumYearFilter::new(2000));
///
/// let survivors = pipeline.apply(catalog.titles().iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for one recommendation query.
    ///
    /// Absent identity filters and `Either` add no stage; the minimum
    /// year stage is always present.
    pub fn for_query(query: &RecommendationQuery) -> Self {
        let mut pipeline = Self::new();
        if let Some(genre) = &query.genre {
            pipeline = pipeline.add_filter(SubstringFilter::genre(genre));
        }
        if let Some(director) = &query.director {
            pipeline = pipeline.add_filter(SubstringFilter::director(director));
        }
        if let Some(country) = &query.country {
            pipeline = pipeline.add_filter(SubstringFilter::country(country));
        }
        if query.content_type != ContentTypeFilter::Either {
            pipeline = pipeline.add_filter(ContentTypeMatchFilter::new(query.content_type));
        }
        pipeline.add_filter(MinimumYearFilter::new(query.min_year))
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Each stage logs its name with input and output counts at debug level.
    /// Candidate order is preserved.
    pub fn apply<'a>(&self, candidates: Vec<&'a TitleRecord>) -> Vec<&'a TitleRecord> {
        let mut current = candidates;
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

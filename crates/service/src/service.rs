//! # Recommendation Service
//!
//! Entry point for the display layer. Each call:
//! 1. Takes the current snapshot once, so the whole call sees one catalog
//! 2. Validates raw input against that snapshot's year range
//! 3. Runs the engine and wraps the result in a `RecommendationOutcome`
//!
//! Options and statistics come from the snapshot caches.

use std::sync::Arc;
use std::time::Instant;

use analytics::{CatalogAnalysis, OptionVocabulary};
use pipeline::ScoredTitle;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::Result;
use crate::store::{CatalogSnapshot, CatalogStore};
use crate::validation::{QueryParams, ServiceConfig};

/// Result of a validated query: ranked matches, or an explicit "nothing matched"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "titles", rename_all = "snake_case")]
pub enum RecommendationOutcome {
    Matches(Vec<ScoredTitle>),
    NoMatches,
}

impl RecommendationOutcome {
    fn from_results(results: Vec<ScoredTitle>) -> Self {
        if results.is_empty() {
            RecommendationOutcome::NoMatches
        } else {
            RecommendationOutcome::Matches(results)
        }
    }

    pub fn titles(&self) -> &[ScoredTitle] {
        match self {
            RecommendationOutcome::Matches(titles) => titles,
            RecommendationOutcome::NoMatches => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.titles().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RecommendationOutcome::NoMatches)
    }
}

/// Validated access to recommendations, options and statistics
#[derive(Debug, Clone)]
pub struct RecommendationService {
    store: Arc<CatalogStore>,
    config: ServiceConfig,
}

impl RecommendationService {
    pub fn new(store: Arc<CatalogStore>, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.store.snapshot()
    }

    /// Validate `params` and return ranked recommendations.
    #[instrument(
        skip_all,
        fields(genre = %params.genre, director = %params.director, country = %params.country)
    )]
    pub fn recommend(&self, params: &QueryParams) -> Result<RecommendationOutcome> {
        let start_time = Instant::now();
        let snapshot = self.store.snapshot();
        let query = params.validate(&self.config, snapshot.catalog().year_range())?;

        let results = pipeline::recommend(snapshot.catalog(), &query);
        info!(
            "Found {} recommendations for {} in {:.2?}",
            results.len(),
            query,
            start_time.elapsed()
        );

        Ok(RecommendationOutcome::from_results(results))
    }

    /// Option vocabulary of the current snapshot
    pub fn options(&self) -> OptionVocabulary {
        self.store.snapshot().options().clone()
    }

    /// Catalog statistics of the current snapshot
    pub fn analysis(&self) -> CatalogAnalysis {
        self.store.snapshot().analysis().clone()
    }
}

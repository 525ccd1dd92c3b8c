//! Option Indexer - dropdown vocabularies for the filterable dimensions
//!
//! Builds the distinct values offered for genre, director and country:
//! - genres: every distinct token
//! - directors: only those credited on more than 1 title
//! - countries: only those with more than 5 titles
//!
//! The thresholds are a fixed editorial choice to keep the lists short,
//! not a statistical cut-off. Every list starts with the `""` sentinel
//! meaning "don't filter on this dimension".

use crate::tally::Tally;
use data_loader::Catalog;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The "no filter" entry at the head of every vocabulary
pub const NO_FILTER: &str = "";

/// Directors must appear in strictly more titles than this
pub const DIRECTOR_THRESHOLD: usize = 1;

/// Countries must appear in strictly more titles than this
pub const COUNTRY_THRESHOLD: usize = 5;

/// Distinct, threshold-filtered values per dimension, sentinel first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionVocabulary {
    pub genres: Vec<String>,
    pub directors: Vec<String>,
    pub countries: Vec<String>,
}

/// Number of real entries per dimension (sentinel excluded)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularySummary {
    pub genres: usize,
    pub directors: usize,
    pub countries: usize,
}

impl OptionVocabulary {
    pub fn summary(&self) -> VocabularySummary {
        VocabularySummary {
            genres: self.genres.len().saturating_sub(1),
            directors: self.directors.len().saturating_sub(1),
            countries: self.countries.len().saturating_sub(1),
        }
    }
}

/// Builds an `OptionVocabulary` from a catalog
#[derive(Debug, Clone, Copy)]
pub struct OptionIndexer {
    director_threshold: usize,
    country_threshold: usize,
}

impl OptionIndexer {
    /// Create an indexer with the default thresholds (directors > 1, countries > 5)
    pub fn new() -> Self {
        Self {
            director_threshold: DIRECTOR_THRESHOLD,
            country_threshold: COUNTRY_THRESHOLD,
        }
    }

    /// Configure the director threshold (default: 1)
    pub fn with_director_threshold(mut self, threshold: usize) -> Self {
        self.director_threshold = threshold;
        self
    }

    /// Configure the country threshold (default: 5)
    pub fn with_country_threshold(mut self, threshold: usize) -> Self {
        self.country_threshold = threshold;
        self
    }

    #[instrument(skip_all, fields(catalog_size = catalog.len()))]
    pub fn build(&self, catalog: &Catalog) -> OptionVocabulary {
        let mut genres = Tally::new();
        let mut directors = Tally::new();
        let mut countries = Tally::new();

        for title in catalog.titles() {
            genres.add_all(title.genres());
            directors.add_all(title.directors());
            countries.add_all(title.countries());
        }

        let vocabulary = OptionVocabulary {
            genres: with_sentinel(genres.tokens_above(0)),
            directors: with_sentinel(directors.tokens_above(self.director_threshold)),
            countries: with_sentinel(countries.tokens_above(self.country_threshold)),
        };

        debug!(
            "Built option vocabulary: {} genres, {}/{} directors, {}/{} countries",
            vocabulary.genres.len() - 1,
            vocabulary.directors.len() - 1,
            directors.len(),
            vocabulary.countries.len() - 1,
            countries.len()
        );
        vocabulary
    }
}

impl Default for OptionIndexer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the vocabulary with the default thresholds
pub fn build_options(catalog: &Catalog) -> OptionVocabulary {
    OptionIndexer::new().build(catalog)
}

fn with_sentinel(values: Vec<String>) -> Vec<String> {
    let mut list = Vec::with_capacity(values.len() + 1);
    list.push(NO_FILTER.to_string());
    list.extend(values);
    list
}

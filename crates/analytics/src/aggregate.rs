//! Aggregate Analyzer - summary statistics over the whole catalog
//!
//! Counts by content type, the ten most common genres and countries, and
//! the number of titles per release year. Tokenization is the same as the
//! option indexer's, but every token counts: no popularity thresholds.

use std::collections::BTreeMap;

use crate::tally::Tally;
use data_loader::Catalog;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Length of the top-N genre and country lists
pub const TOP_N: usize = 10;

/// Dashboard statistics for one catalog snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogAnalysis {
    pub total_count: usize,
    pub movie_count: usize,
    pub tv_show_count: usize,
    /// Titles left out of `year_distribution` because their year is unknown
    pub unknown_year_count: usize,
    /// At most `TOP_N` (genre, count), count descending, ties in first-seen order
    pub top_genres: Vec<(String, usize)>,
    /// At most `TOP_N` (country, count), same ordering as `top_genres`
    pub top_countries: Vec<(String, usize)>,
    /// Release year -> number of titles, ascending by year
    pub year_distribution: BTreeMap<u16, usize>,
}

/// Compute the catalog statistics
#[instrument(skip_all, fields(catalog_size = catalog.len()))]
pub fn analyze(catalog: &Catalog) -> CatalogAnalysis {
    let mut genres = Tally::new();
    let mut countries = Tally::new();
    let mut year_distribution = BTreeMap::new();
    let mut unknown_year_count = 0;

    for title in catalog.titles() {
        match title.release_year {
            Some(year) => *year_distribution.entry(year).or_insert(0) += 1,
            None => unknown_year_count += 1,
        }
        genres.add_all(title.genres());
        countries.add_all(title.countries());
    }

    let (movie_count, tv_show_count) = catalog.type_counts();
    CatalogAnalysis {
        total_count: catalog.len(),
        movie_count,
        tv_show_count,
        unknown_year_count,
        top_genres: genres.most_common(TOP_N),
        top_countries: countries.most_common(TOP_N),
        year_distribution,
    }
}

//! The recommendation query: which predicates to apply and how many results to keep.

use data_loader::ContentType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default minimum release year when the caller does not supply one
pub const DEFAULT_MIN_YEAR: u16 = 1900;

/// Default number of results
pub const DEFAULT_LIMIT: usize = 10;

/// Content type restriction of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContentTypeFilter {
    Movie,
    TvShow,
    #[default]
    Either,
}

impl ContentTypeFilter {
    /// Whether a record of `content_type` is admitted
    pub fn admits(self, content_type: ContentType) -> bool {
        match self {
            ContentTypeFilter::Either => true,
            ContentTypeFilter::Movie => content_type == ContentType::Movie,
            ContentTypeFilter::TvShow => content_type == ContentType::TvShow,
        }
    }
}

impl fmt::Display for ContentTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentTypeFilter::Movie => f.write_str("Movie"),
            ContentTypeFilter::TvShow => f.write_str("TV Show"),
            ContentTypeFilter::Either => f.write_str("Both"),
        }
    }
}

/// Parameters of one `recommend` call.
///
/// `genre`, `director` and `country` are optional case-insensitive substring
/// needles. The engine accepts a query with none of them (an all-pass filter
/// on type and year); rejecting that case is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationQuery {
    pub genre: Option<String>,
    pub director: Option<String>,
    pub country: Option<String>,
    pub content_type: ContentTypeFilter,
    pub limit: usize,
    pub min_year: u16,
}

impl RecommendationQuery {
    pub fn new(limit: usize, min_year: u16) -> Self {
        Self {
            genre: None,
            director: None,
            country: None,
            content_type: ContentTypeFilter::Either,
            limit,
            min_year,
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_content_type(mut self, content_type: ContentTypeFilter) -> Self {
        self.content_type = content_type;
        self
    }

    /// True if at least one of genre/director/country is set
    pub fn has_identity_filter(&self) -> bool {
        self.genre.is_some() || self.director.is_some() || self.country.is_some()
    }
}

impl Default for RecommendationQuery {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_MIN_YEAR)
    }
}

/// Human-readable list of the identity filters, e.g. `genre 'Dramas', country 'India'`
impl fmt::Display for RecommendationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let applied: Vec<String> = [
            ("genre", &self.genre),
            ("director", &self.director),
            ("country", &self.country),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_ref().map(|v| format!("{label} '{v}'")))
        .collect();

        if applied.is_empty() {
            f.write_str("your criteria")
        } else {
            f.write_str(&applied.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_filter_admits() {
        assert!(ContentTypeFilter::Either.admits(ContentType::Movie));
        assert!(ContentTypeFilter::Either.admits(ContentType::TvShow));
        assert!(ContentTypeFilter::Movie.admits(ContentType::Movie));
        assert!(!ContentTypeFilter::Movie.admits(ContentType::TvShow));
        assert!(!ContentTypeFilter::TvShow.admits(ContentType::Movie));
    }

    #[test]
    fn test_query_display() {
        let query = RecommendationQuery::default()
            .with_genre("Dramas")
            .with_country("India");
        assert_eq!(query.to_string(), "genre 'Dramas', country 'India'");
        assert_eq!(RecommendationQuery::default().to_string(), "your criteria");
    }

    #[test]
    fn test_has_identity_filter() {
        assert!(!RecommendationQuery::default().has_identity_filter());
        assert!(RecommendationQuery::default().with_director("Nolan").has_identity_filter());
    }
}

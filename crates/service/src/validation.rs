//! Boundary validation: raw display-layer input -> `RecommendationQuery`
//!
//! The engine itself accepts any well-typed query. Everything that can be
//! wrong with user input is caught here instead:
//! - limit must be positive; values above `max_limit` are clamped
//! - min_year must fit a year and is clamped to the catalog's year range
//!   (when the catalog has one)
//! - content type text must name a known type
//! - empty filter strings (the option sentinel) mean "no filter"
//! - at least one of genre, director or country must be given

use crate::error::{Result, ValidationError};
use pipeline::{ContentTypeFilter, RecommendationQuery, DEFAULT_LIMIT};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default upper bound on the number of results per query
pub const DEFAULT_MAX_LIMIT: usize = 100;

/// Limits applied at the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

fn default_max_limit() -> usize {
    DEFAULT_MAX_LIMIT
}

impl ServiceConfig {
    pub fn with_max_limit(mut self, max_limit: usize) -> Self {
        self.max_limit = max_limit;
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_limit: DEFAULT_MAX_LIMIT,
        }
    }
}

/// Unvalidated query input as a form or command line delivers it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub content_type: String,
    pub limit: i64,
    pub min_year: i64,
}

impl QueryParams {
    pub fn new(limit: i64, min_year: i64) -> Self {
        Self {
            genre: String::new(),
            director: String::new(),
            country: String::new(),
            content_type: String::new(),
            limit,
            min_year,
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = director.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Check the input and build the engine query.
    ///
    /// `year_range` is the catalog's observed (min, max) release year.
    pub fn validate(
        &self,
        config: &ServiceConfig,
        year_range: Option<(u16, u16)>,
    ) -> Result<RecommendationQuery> {
        let limit = clamp_limit(self.limit, config.max_limit)?;
        let min_year = clamp_min_year(self.min_year, year_range)?;
        let content_type = parse_content_type(&self.content_type)?;

        let mut query = RecommendationQuery::new(limit, min_year).with_content_type(content_type);
        query.genre = non_empty(&self.genre);
        query.director = non_empty(&self.director);
        query.country = non_empty(&self.country);

        if !query.has_identity_filter() {
            return Err(ValidationError::NoCriteria);
        }
        Ok(query)
    }
}

impl Default for QueryParams {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT as i64, i64::from(pipeline::DEFAULT_MIN_YEAR))
    }
}

/// Parse content type text; blank means either type.
///
/// Accepts "Movie", "TV Show", "TVShow", "Both" and "Either", ignoring case.
pub fn parse_content_type(text: &str) -> Result<ContentTypeFilter> {
    match text.trim().to_lowercase().as_str() {
        "" | "both" | "either" => Ok(ContentTypeFilter::Either),
        "movie" => Ok(ContentTypeFilter::Movie),
        "tv show" | "tvshow" => Ok(ContentTypeFilter::TvShow),
        _ => Err(ValidationError::UnknownContentType(text.to_string())),
    }
}

fn clamp_limit(limit: i64, max_limit: usize) -> Result<usize> {
    if limit <= 0 {
        return Err(ValidationError::InvalidLimit(limit));
    }
    let requested = usize::try_from(limit).unwrap_or(usize::MAX);
    if requested > max_limit {
        debug!(requested, max_limit, "Clamping limit");
    }
    Ok(requested.min(max_limit))
}

fn clamp_min_year(min_year: i64, year_range: Option<(u16, u16)>) -> Result<u16> {
    let year = u16::try_from(min_year).map_err(|_| ValidationError::YearOutOfRange(min_year))?;
    // No known year to clamp against: the query simply matches nothing
    let Some((lo, hi)) = year_range else {
        return Ok(year);
    };
    let clamped = year.clamp(lo, hi);
    if clamped != year {
        debug!(year, clamped, "Clamping minimum year to catalog range");
    }
    Ok(clamped)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

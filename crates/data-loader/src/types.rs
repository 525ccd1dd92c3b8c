//! Core domain types for the title catalog.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - `RawRow`: one untyped row as delivered by the data source
//! - `TitleRecord`: the canonical, normalized form of a row
//! - `Catalog`: the immutable in-memory snapshot of all records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Implicit row identity: zero-based position in load order
pub type TitleId = usize;

/// One row from the data source: column name -> text or null
///
/// A `BTreeMap` keeps column order deterministic for logging and tests.
pub type RawRow = BTreeMap<String, Option<String>>;

// =============================================================================
// Column names
// =============================================================================

pub const COL_TITLE: &str = "title";
pub const COL_TYPE: &str = "type";
pub const COL_RELEASE_YEAR: &str = "release_year";
pub const COL_LISTED_IN: &str = "listed_in";
pub const COL_DIRECTOR: &str = "director";
pub const COL_COUNTRY: &str = "country";
pub const COL_RATING: &str = "rating";
pub const COL_DESCRIPTION: &str = "description";

/// Columns every row must carry for the load to succeed
pub const REQUIRED_COLUMNS: [&str; 4] = [COL_TITLE, COL_TYPE, COL_RELEASE_YEAR, COL_LISTED_IN];

/// Columns that are read when present and treated as null when absent
pub const OPTIONAL_COLUMNS: [&str; 4] = [COL_DIRECTOR, COL_COUNTRY, COL_RATING, COL_DESCRIPTION];

// =============================================================================
// Content type
// =============================================================================

/// The two kinds of title in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    Movie,
    #[serde(rename = "TV Show")]
    TvShow,
}

impl ContentType {
    /// Parse the wire value used by the data source.
    ///
    /// Accepts `"Movie"`, `"TV Show"` and `"TVShow"`; surrounding whitespace is ignored.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value.trim() {
            "Movie" => Some(ContentType::Movie),
            "TV Show" | "TVShow" => Some(ContentType::TvShow),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Movie => "Movie",
            ContentType::TvShow => "TV Show",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Title record
// =============================================================================

/// A normalized catalog row.
///
/// `listed_in`, `director` and `country` keep their raw comma-separated text
/// so that substring matching sees exactly what the data source delivered.
/// Missing values are normalized to `""`, never null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleRecord {
    pub id: TitleId,
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// `None` when the source value was missing or not an integer year
    pub release_year: Option<u16>,
    pub listed_in: String,
    pub director: String,
    pub country: String,
    pub rating: Option<String>,
    pub description: Option<String>,
}

impl TitleRecord {
    /// Trimmed, non-empty genre tokens of `listed_in`
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        split_list(&self.listed_in)
    }

    /// Trimmed, non-empty director tokens
    pub fn directors(&self) -> impl Iterator<Item = &str> {
        split_list(&self.director)
    }

    /// Trimmed, non-empty country tokens
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        split_list(&self.country)
    }
}

/// Split a comma-separated list field into trimmed tokens, skipping empty ones.
///
/// Example: `"Dramas, International Movies,"` -> `["Dramas", "International Movies"]`
pub fn split_list(field: &str) -> impl Iterator<Item = &str> {
    field
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

// =============================================================================
// Catalog - the in-memory snapshot
// =============================================================================

/// The canonical, read-only table of all title records.
///
/// Built once by [`Catalog::load`]; there are no mutators. A reload produces a
/// brand new `Catalog`.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) titles: Vec<TitleRecord>,
    /// Min and max known release year, `None` if no record has a year
    pub(crate) year_range: Option<(u16, u16)>,
}

impl Catalog {
    /// All records in load order
    pub fn titles(&self) -> &[TitleRecord] {
        &self.titles
    }

    /// Get a record by its row identity
    pub fn get(&self, id: TitleId) -> Option<&TitleRecord> {
        self.titles.get(id)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Observed (min, max) release year across the catalog
    pub fn year_range(&self) -> Option<(u16, u16)> {
        self.year_range
    }

    /// Number of (movies, tv shows)
    pub fn type_counts(&self) -> (usize, usize) {
        let movies = self
            .titles
            .iter()
            .filter(|t| t.content_type == ContentType::Movie)
            .count();
        (movies, self.titles.len() - movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_skips_empty() {
        let tokens: Vec<&str> = split_list(" Dramas ,International Movies,, ").collect();
        assert_eq!(tokens, vec!["Dramas", "International Movies"]);
        assert_eq!(split_list("").count(), 0);
    }

    #[test]
    fn test_content_type_wire_values() {
        assert_eq!(ContentType::from_wire("Movie"), Some(ContentType::Movie));
        assert_eq!(ContentType::from_wire("TV Show"), Some(ContentType::TvShow));
        assert_eq!(ContentType::from_wire(" TVShow "), Some(ContentType::TvShow));
        assert_eq!(ContentType::from_wire("movie"), None);
        assert_eq!(ContentType::TvShow.to_string(), "TV Show");
    }

    #[test]
    fn test_content_type_serde_uses_wire_names() {
        let json = serde_json::to_string(&ContentType::TvShow).unwrap();
        assert_eq!(json, "\"TV Show\"");
    }
}

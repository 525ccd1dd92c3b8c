//! Catalog building and lookup helpers.
//!
//! This module turns raw rows into the canonical `Catalog`:
//! - Check the schema (required columns present, catalog not empty)
//! - Normalize every row into a `TitleRecord` (in parallel with Rayon)
//! - Record the observed release year range
//!
//! It also hosts the read-only lookups the loader offers on top of the
//! snapshot (title search, genre/director lookups, year range, type).

use crate::error::{LoadError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info, instrument};

impl Catalog {
    /// Load and normalize a catalog export from disk.
    ///
    /// This is the main entry point for loading data.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading title catalog from {}", path.display());
        let rows = parser::read_rows(path)?;
        let catalog = Self::load(rows)?;
        info!("Loaded {} titles", catalog.len());
        Ok(catalog)
    }

    /// Build the canonical catalog from raw rows.
    ///
    /// Steps:
    /// 1. Reject an empty row set
    /// 2. Reject rows missing any required column
    /// 3. Normalize each row into a `TitleRecord`
    /// 4. Compute the observed release year range
    pub fn load(raw_rows: Vec<RawRow>) -> Result<Self> {
        if raw_rows.is_empty() {
            return Err(LoadError::EmptyCatalog);
        }

        check_columns(&raw_rows)?;

        let titles = raw_rows
            .into_par_iter()
            .enumerate()
            .map(|(id, row)| normalize_row(id, row))
            .collect::<Result<Vec<TitleRecord>>>()?;

        let year_range = titles
            .iter()
            .filter_map(|t| t.release_year)
            .fold(None, |range, year| match range {
                None => Some((year, year)),
                Some((lo, hi)) => Some((year.min(lo), year.max(hi))),
            });

        let unknown_years = titles.iter().filter(|t| t.release_year.is_none()).count();
        if unknown_years > 0 {
            debug!("{} titles have no usable release year", unknown_years);
        }

        Ok(Self { titles, year_range })
    }

    /// Titles whose name contains `needle`, case-insensitively
    pub fn search_title(&self, needle: &str) -> Vec<&TitleRecord> {
        self.matching(needle, |t| t.title.as_str())
    }

    /// Titles whose raw `listed_in` text contains `needle`, case-insensitively
    pub fn titles_by_genre(&self, needle: &str) -> Vec<&TitleRecord> {
        self.matching(needle, |t| t.listed_in.as_str())
    }

    /// Titles whose raw `director` text contains `needle`, case-insensitively
    pub fn titles_by_director(&self, needle: &str) -> Vec<&TitleRecord> {
        self.matching(needle, |t| t.director.as_str())
    }

    /// Titles released between `start` and `end` inclusive; unknown years never match
    pub fn titles_in_year_range(&self, start: u16, end: u16) -> Vec<&TitleRecord> {
        self.titles
            .iter()
            .filter(|t| matches!(t.release_year, Some(year) if year >= start && year <= end))
            .collect()
    }

    /// Titles of one content type
    pub fn titles_of_type(&self, content_type: ContentType) -> Vec<&TitleRecord> {
        self.titles
            .iter()
            .filter(|t| t.content_type == content_type)
            .collect()
    }

    fn matching<'a>(
        &'a self,
        needle: &str,
        field: impl Fn(&'a TitleRecord) -> &'a str,
    ) -> Vec<&'a TitleRecord> {
        let needle = needle.to_lowercase();
        self.titles
            .iter()
            .filter(|t| field(*t).to_lowercase().contains(&needle))
            .collect()
    }
}

/// Verify every row carries the required columns and log ignored extras
fn check_columns(raw_rows: &[RawRow]) -> Result<()> {
    let mut extra_columns = BTreeSet::new();

    for (row, fields) in raw_rows.iter().enumerate() {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !fields.contains_key(**column))
            .map(|column| column.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns {
                row,
                columns: missing,
            });
        }

        extra_columns.extend(
            fields
                .keys()
                .filter(|key| {
                    !REQUIRED_COLUMNS.contains(&key.as_str())
                        && !OPTIONAL_COLUMNS.contains(&key.as_str())
                })
                .cloned(),
        );
    }

    if !extra_columns.is_empty() {
        debug!(?extra_columns, "Ignoring columns outside the catalog schema");
    }
    Ok(())
}

/// Coerce one raw row into a typed record.
///
/// - `type` must be a known content type
/// - `release_year` becomes `None` when it is not an integer year
/// - list fields and `title` default to `""`
/// - `rating`/`description` blank or null become `None`
fn normalize_row(id: TitleId, mut row: RawRow) -> Result<TitleRecord> {
    let mut take = |column: &str| row.remove(column).flatten();

    let raw_type = take(COL_TYPE).unwrap_or_default();
    let content_type = ContentType::from_wire(&raw_type).ok_or_else(|| LoadError::InvalidValue {
        row: id,
        field: COL_TYPE.to_string(),
        value: raw_type.clone(),
    })?;

    let release_year = parser::parse_release_year(take(COL_RELEASE_YEAR).as_deref());

    Ok(TitleRecord {
        id,
        title: take(COL_TITLE).unwrap_or_default(),
        content_type,
        release_year,
        listed_in: take(COL_LISTED_IN).unwrap_or_default(),
        director: take(COL_DIRECTOR).unwrap_or_default(),
        country: take(COL_COUNTRY).unwrap_or_default(),
        rating: take(COL_RATING).filter(|v| !v.trim().is_empty()),
        description: take(COL_DESCRIPTION).filter(|v| !v.trim().is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[(&str, Option<&str>)]) -> RawRow {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect()
    }

    fn sample_rows() -> Vec<RawRow> {
        vec![
            row(&[
                ("title", Some("A")),
                ("type", Some("Movie")),
                ("release_year", Some("2019")),
                ("listed_in", Some("Comedies,Dramas")),
                ("director", Some("X")),
                ("country", Some("US")),
                ("rating", Some("TV-MA")),
            ]),
            row(&[
                ("title", Some("B")),
                ("type", Some("TV Show")),
                ("release_year", Some("not a year")),
                ("listed_in", None),
                ("director", None),
                ("country", None),
                ("rating", None),
                ("show_id", Some("s2")),
            ]),
            row(&[
                ("title", Some("C")),
                ("type", Some("Movie")),
                ("release_year", Some("1999")),
                ("listed_in", Some("Dramas")),
            ]),
        ]
    }

    #[test]
    fn test_load_normalizes_rows() {
        let catalog = Catalog::load(sample_rows()).unwrap();
        assert_eq!(catalog.len(), 3);

        let a = catalog.get(0).unwrap();
        assert_eq!(a.release_year, Some(2019));
        assert_eq!(a.rating.as_deref(), Some("TV-MA"));
        assert_eq!(a.description, None);

        let b = catalog.get(1).unwrap();
        assert_eq!(b.content_type, ContentType::TvShow);
        assert_eq!(b.release_year, None);
        assert_eq!(b.listed_in, "");
        assert_eq!(b.director, "");
        assert_eq!(b.country, "");

        // Optional columns may be absent entirely
        let c = catalog.get(2).unwrap();
        assert_eq!(c.director, "");
        assert_eq!(c.id, 2);
    }

    #[test]
    fn test_year_range_ignores_unknown_years() {
        let catalog = Catalog::load(sample_rows()).unwrap();
        assert_eq!(catalog.year_range(), Some((1999, 2019)));
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let result = Catalog::load(Vec::new());
        assert!(matches!(result, Err(LoadError::EmptyCatalog)));
    }

    #[test]
    fn test_missing_required_columns() {
        let mut rows = sample_rows();
        rows[1].remove("listed_in");
        rows[1].remove("release_year");

        match Catalog::load(rows) {
            Err(LoadError::MissingColumns { row, columns }) => {
                assert_eq!(row, 1);
                assert_eq!(columns, vec!["release_year", "listed_in"]);
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_content_type_is_rejected() {
        let mut rows = sample_rows();
        rows[2].insert("type".to_string(), Some("Podcast".to_string()));
        let result = Catalog::load(rows);
        assert!(matches!(
            result,
            Err(LoadError::InvalidValue { row: 2, ref field, .. }) if field == "type"
        ));
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::load(sample_rows()).unwrap();

        assert_eq!(catalog.search_title("a").len(), 1);
        assert_eq!(catalog.titles_by_genre("dramas").len(), 2);
        assert_eq!(catalog.titles_by_director("x").len(), 1);
        assert_eq!(catalog.titles_in_year_range(1990, 2000).len(), 1);
        assert_eq!(catalog.titles_of_type(ContentType::TvShow).len(), 1);
        assert_eq!(catalog.type_counts(), (2, 1));
    }
}

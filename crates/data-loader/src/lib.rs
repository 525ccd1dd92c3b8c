//! # Data Loader Crate
//!
//! This crate handles loading a title catalog export and normalizing it into
//! an immutable in-memory `Catalog`.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (TitleRecord, ContentType, Catalog)
//! - **parser**: Read JSON / CSV exports into raw rows
//! - **index**: Normalize rows into the catalog and offer lookups
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/netflix_titles.csv"))?;
//!
//! let dramas = catalog.titles_by_genre("Dramas");
//! println!("{} of {} titles are dramas", dramas.len(), catalog.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{LoadError, Result};
pub use types::{
    split_list,
    Catalog,
    ContentType,
    RawRow,
    TitleId,
    TitleRecord,
    REQUIRED_COLUMNS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_two_record_catalog_from_json() {
        let json = r#"[
            {"title": "A", "type": "Movie", "release_year": 2019, "listed_in": "Comedies,Dramas", "director": "X", "country": "US"},
            {"title": "B", "type": "Movie", "release_year": 2010, "listed_in": "Dramas", "director": "Y", "country": "US"}
        ]"#;

        let rows = parser::parse_json_rows(json).unwrap();
        let catalog = Catalog::load(rows).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.year_range(), Some((2010, 2019)));
        assert_eq!(catalog.titles()[0].title, "A");
        assert_eq!(catalog.titles()[1].genres().collect::<Vec<_>>(), vec!["Dramas"]);
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = Catalog::load_from_file(std::path::Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_empty_json_array_is_empty_catalog() {
        let rows = parser::parse_json_rows("[]").unwrap();
        assert!(matches!(Catalog::load(rows), Err(LoadError::EmptyCatalog)));
    }
}

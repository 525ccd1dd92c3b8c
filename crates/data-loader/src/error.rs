//! Error types for the data-loader crate.
//!
//! Every failure here is fatal to the load step: a catalog that cannot be
//! built is surfaced to the caller, never replaced with an empty one.

use thiserror::Error;

/// Errors that can occur while reading rows or building the catalog
#[derive(Error, Debug)]
pub enum LoadError {
    /// The data source returned no rows at all
    #[error("Catalog is empty: the data source returned no rows")]
    EmptyCatalog,

    /// A row is missing one or more of the required columns
    ///
    /// `row` is the zero-based position of the first offending row
    #[error("Row {row} is missing required columns: {}", .columns.join(", "))]
    MissingColumns { row: usize, columns: Vec<String> },

    /// A field had a value outside the catalog schema
    #[error("Invalid value for {field} at row {row}: {value}")]
    InvalidValue {
        row: usize,
        field: String,
        value: String,
    },

    /// The row document itself could not be parsed
    #[error("Parse error in {source_name}: {reason}")]
    Parse { source_name: String, reason: String },

    /// I/O error occurred while reading the export file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader failure (bad quoting, ragged rows, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File extension is neither `.json` nor `.csv`
    #[error("Unsupported catalog format: {path}")]
    UnsupportedFormat { path: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, LoadError>;

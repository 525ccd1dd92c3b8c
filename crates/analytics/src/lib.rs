//! # Analytics Crate
//!
//! Derived views over a catalog snapshot for the display layer.
//!
//! ## Components
//!
//! ### Option Indexer
//! Dropdown vocabularies for genre, director and country:
//! - Genres: every distinct token
//! - Directors: credited on more than one title
//! - Countries: more than five titles
//! - Every list starts with the `""` "no filter" sentinel
//!
//! ### Aggregate Analyzer
//! Dashboard statistics:
//! - Totals by content type
//! - Top 10 genres and countries
//! - Titles per release year
//!
//! Both are pure functions of the catalog; callers cache them per snapshot.
//!
//! ## Example Usage
//!
//! ```ignore
//! use analytics::{analyze, build_options};
//!
//! let options = build_options(&catalog);
//! let stats = analyze(&catalog);
//! println!("{} genres, {} titles", options.summary().genres, stats.total_count);
//! ```

// Public modules
pub mod aggregate;
pub mod options;
pub mod tally;

// Re-export commonly used types
pub use aggregate::{analyze, CatalogAnalysis, TOP_N};
pub use options::{build_options, OptionIndexer, OptionVocabulary, VocabularySummary, NO_FILTER};
pub use tally::Tally;

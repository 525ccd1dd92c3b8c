//! Recommendation engine: filtering, popularity scoring and ranking of catalog titles.
//!
//! This crate provides:
//! - Filter trait and implementations for the query predicates
//! - FilterPipeline for composing filters
//! - Popularity scoring (recency bonus + genre bonus)
//! - `recommend`, the ranked and bounded end-to-end operation
//!
//! ## Architecture
//! The engine processes a query in stages:
//! 1. Filters keep records matching genre/director/country substrings,
//!    the content type and the minimum release year
//! 2. Survivors are scored in parallel
//! 3. Scores are ranked with a deterministic tie-break and truncated
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{recommend, RecommendationQuery};
//!
//! let query = RecommendationQuery::new(10, 2000).with_genre("Dramas");
//! for rec in recommend(&catalog, &query) {
//!     println!("{} ({:.1})", rec.title.title, rec.popularity_score);
//! }
//! ```

pub mod engine;
pub mod filter_pipeline;
pub mod filters;
pub mod query;
pub mod scoring;
pub mod traits;

// Re-export main types
pub use engine::recommend;
pub use filter_pipeline::FilterPipeline;
pub use query::{ContentTypeFilter, RecommendationQuery, DEFAULT_LIMIT, DEFAULT_MIN_YEAR};
pub use scoring::{genre_count, popularity_score, recency_bonus, ScoredTitle};
pub use traits::Filter;

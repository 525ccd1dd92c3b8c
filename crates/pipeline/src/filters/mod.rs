//! Filter implementations for the recommendation pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod content_type;
pub mod minimum_year;
pub mod substring;

// Re-export for convenience
pub use content_type::ContentTypeMatchFilter;
pub use minimum_year::MinimumYearFilter;
pub use substring::{ListField, SubstringFilter};

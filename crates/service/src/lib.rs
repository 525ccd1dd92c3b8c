//! Service crate for the catalog recommendation engine.
//!
//! Holds the current catalog snapshot with its memoized option vocabulary
//! and analysis, and validates display-layer input before it reaches the
//! engine.

pub mod error;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{Result, ValidationError};
pub use service::{RecommendationOutcome, RecommendationService};
pub use store::{CatalogSnapshot, CatalogStore};
pub use validation::{parse_content_type, QueryParams, ServiceConfig, DEFAULT_MAX_LIMIT};

use thiserror::Error;

/// Rejections raised while turning display-layer input into a query
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Limit must be at least 1, got {0}")]
    InvalidLimit(i64),

    #[error("Minimum year {0} is outside the representable range 0..=65535")]
    YearOutOfRange(i64),

    #[error("Unknown content type '{0}' (expected Movie, TV Show or Both)")]
    UnknownContentType(String),

    #[error("Select at least one of genre, director or country")]
    NoCriteria,
}

pub type Result<T> = std::result::Result<T, ValidationError>;

//! Filter to enforce a minimum release year.
//!
//! Records with an unknown release year never pass, whatever the threshold.

use crate::traits::Filter;
use data_loader::TitleRecord;

/// Keeps records released in or after `min_year`.
pub struct MinimumYearFilter {
    min_year: u16,
}

impl MinimumYearFilter {
    pub fn new(min_year: u16) -> Self {
        Self { min_year }
    }
}

impl Filter for MinimumYearFilter {
    fn name(&self) -> &str {
        "MinimumYearFilter"
    }

    fn matches(&self, title: &TitleRecord) -> bool {
        matches!(title.release_year, Some(year) if year >= self.min_year)
    }
}

//! Case-insensitive substring filters over the raw list fields.
//!
//! Matching runs against the raw comma-separated text, not individual
//! tokens: "Drama" matches "TV Dramas", and "United" matches both
//! "United States" and "United Kingdom".

use crate::traits::Filter;
use data_loader::TitleRecord;

/// Which raw text field a `SubstringFilter` looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Genre,
    Director,
    Country,
}

impl ListField {
    fn value(self, title: &TitleRecord) -> &str {
        match self {
            ListField::Genre => &title.listed_in,
            ListField::Director => &title.director,
            ListField::Country => &title.country,
        }
    }
}

/// Keeps records whose field contains the needle, ignoring case.
pub struct SubstringFilter {
    field: ListField,
    /// Lowercased once at construction
    needle: String,
    name: &'static str,
}

impl SubstringFilter {
    pub fn new(field: ListField, needle: &str) -> Self {
        let name = match field {
            ListField::Genre => "GenreFilter",
            ListField::Director => "DirectorFilter",
            ListField::Country => "CountryFilter",
        };
        Self {
            field,
            needle: needle.to_lowercase(),
            name,
        }
    }

    pub fn genre(needle: &str) -> Self {
        Self::new(ListField::Genre, needle)
    }

    pub fn director(needle: &str) -> Self {
        Self::new(ListField::Director, needle)
    }

    pub fn country(needle: &str) -> Self {
        Self::new(ListField::Country, needle)
    }
}

impl Filter for SubstringFilter {
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, title: &TitleRecord) -> bool {
        self.field
            .value(title)
            .to_lowercase()
            .contains(&self.needle)
    }
}

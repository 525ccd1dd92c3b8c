//! Filter restricting results to movies or TV shows.

use crate::query::ContentTypeFilter;
use crate::traits::Filter;
use data_loader::TitleRecord;

/// Keeps records of the requested content type; `Either` keeps everything.
pub struct ContentTypeMatchFilter {
    content_type: ContentTypeFilter,
}

impl ContentTypeMatchFilter {
    pub fn new(content_type: ContentTypeFilter) -> Self {
        Self { content_type }
    }
}

impl Filter for ContentTypeMatchFilter {
    fn name(&self) -> &str {
        "ContentTypeFilter"
    }

    fn matches(&self, title: &TitleRecord) -> bool {
        self.content_type.admits(title.content_type)
    }
}

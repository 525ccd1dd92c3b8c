//! # Recommendation Engine
//!
//! Turns a catalog snapshot and a query into a ranked, bounded list:
//! 1. Filter: conjunction of the query's predicates (`FilterPipeline`)
//! 2. Score: popularity score per survivor (parallel, order preserving)
//! 3. Rank: score descending, then release year descending; stable
//! 4. Truncate to `limit`
//!
//! An empty result is a normal outcome, not an error.

use std::cmp::Ordering;
use std::time::Instant;

use data_loader::{Catalog, TitleRecord};
use tracing::{debug, instrument};

use crate::filter_pipeline::FilterPipeline;
use crate::query::RecommendationQuery;
use crate::scoring::{score_candidates, Scored, ScoredTitle};

/// Produce the ranked recommendations for `query`.
///
/// The result length is `min(query.limit, number of records passing the filter)`.
/// Records with equal score and year keep their catalog order.
#[instrument(skip(catalog), fields(catalog_size = catalog.len()))]
pub fn recommend(catalog: &Catalog, query: &RecommendationQuery) -> Vec<ScoredTitle> {
    let start_time = Instant::now();

    let candidates: Vec<&TitleRecord> = catalog.titles().iter().collect();
    let survivors = FilterPipeline::for_query(query).apply(candidates);
    debug!("{} titles passed the filters", survivors.len());

    let mut scored = score_candidates(&survivors);
    rank(&mut scored);
    scored.truncate(query.limit);

    debug!(
        "Selected {} recommendations in {:.2?}",
        scored.len(),
        start_time.elapsed()
    );
    scored.into_iter().map(Scored::to_owned_title).collect()
}

/// Stable sort by (score desc, year desc)
pub(crate) fn rank(scored: &mut [Scored<'_>]) {
    scored.sort_by(|a, b| compare(b, a));
}

/// Ascending comparison on (score, year); callers reverse it for ranking
fn compare(a: &Scored<'_>, b: &Scored<'_>) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.year.cmp(&b.year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ContentTypeFilter;
    use data_loader::{ContentType, RawRow};

    fn row(
        title: &str,
        content_type: &str,
        year: Option<&str>,
        listed_in: &str,
        director: &str,
        country: &str,
    ) -> RawRow {
        let mut row = RawRow::new();
        row.insert("title".into(), Some(title.into()));
        row.insert("type".into(), Some(content_type.into()));
        row.insert("release_year".into(), year.map(Into::into));
        row.insert("listed_in".into(), Some(listed_in.into()));
        row.insert("director".into(), Some(director.into()));
        row.insert("country".into(), Some(country.into()));
        row
    }

    fn two_record_catalog() -> Catalog {
        Catalog::load(vec![
            row("A", "Movie", Some("2019"), "Comedies,Dramas", "X", "US"),
            row("B", "Movie", Some("2010"), "Dramas", "Y", "US"),
        ])
        .unwrap()
    }

    fn titles(results: &[ScoredTitle]) -> Vec<&str> {
        results.iter().map(|r| r.title.title.as_str()).collect()
    }

    #[test]
    fn test_two_record_example() {
        let catalog = two_record_catalog();
        let query = RecommendationQuery::new(10, 2000).with_genre("Dramas");

        let results = recommend(&catalog, &query);

        assert_eq!(titles(&results), vec!["A", "B"]);
        assert_eq!(results[0].popularity_score, 4.0);
        assert_eq!(results[1].popularity_score, 1.5);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let catalog = two_record_catalog();
        let query = RecommendationQuery::new(10, 1900).with_genre("Nonexistent");
        assert!(recommend(&catalog, &query).is_empty());
    }

    #[test]
    fn test_year_breaks_score_ties() {
        // Same score (2 genres, 2015-2017 tier) but different years
        let catalog = Catalog::load(vec![
            row("Older", "Movie", Some("2015"), "Dramas, Comedies", "", ""),
            row("Newer", "Movie", Some("2017"), "Dramas, Comedies", "", ""),
        ])
        .unwrap();

        let results = recommend(&catalog, &RecommendationQuery::new(10, 1900).with_genre("Dramas"));
        assert_eq!(titles(&results), vec!["Newer", "Older"]);
    }

    #[test]
    fn test_exact_ties_keep_catalog_order() {
        let catalog = Catalog::load(vec![
            row("First", "Movie", Some("2016"), "Dramas", "", ""),
            row("Second", "TV Show", Some("2016"), "TV Dramas", "", ""),
            row("Third", "Movie", Some("2016"), "Dramas", "", ""),
        ])
        .unwrap();

        let results = recommend(&catalog, &RecommendationQuery::new(10, 1900).with_genre("drama"));
        assert_eq!(titles(&results), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_limit_truncates() {
        let catalog = Catalog::load(
            (0..20)
                .map(|i| row(&format!("T{i}"), "Movie", Some("2020"), "Dramas", "", ""))
                .collect(),
        )
        .unwrap();

        let results = recommend(&catalog, &RecommendationQuery::new(5, 1900).with_genre("Dramas"));
        assert_eq!(results.len(), 5);
        // All tied: the first five catalog rows
        assert_eq!(titles(&results), vec!["T0", "T1", "T2", "T3", "T4"]);
    }

    #[test]
    fn test_unknown_year_and_type_filters() {
        let catalog = Catalog::load(vec![
            row("No year", "Movie", None, "Dramas", "", ""),
            row("Show", "TV Show", Some("2021"), "TV Dramas", "", ""),
            row("Film", "Movie", Some("2021"), "Dramas", "", ""),
        ])
        .unwrap();

        let query = RecommendationQuery::new(10, 0)
            .with_genre("Dramas")
            .with_content_type(ContentTypeFilter::TvShow);
        let results = recommend(&catalog, &query);
        assert_eq!(titles(&results), vec!["Show"]);
        assert_eq!(results[0].title.content_type, ContentType::TvShow);

        // No year never passes, even with min_year = 0
        let all = recommend(&catalog, &RecommendationQuery::new(10, 0).with_genre("Dramas"));
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_all_pass_query_is_allowed() {
        let catalog = two_record_catalog();
        let results = recommend(&catalog, &RecommendationQuery::new(10, 2015));
        assert_eq!(titles(&results), vec!["A"]);
    }
}

//! Integration tests for the recommendation engine.
//!
//! These tests run `recommend` over a small but realistic catalog and check
//! the properties every query must satisfy.

use data_loader::{parser, Catalog};
use pipeline::{recommend, ContentTypeFilter, RecommendationQuery};

fn create_test_catalog() -> Catalog {
    let json = r#"[
        {"title": "Midnight Mass", "type": "TV Show", "release_year": 2021, "listed_in": "TV Dramas, TV Horror, TV Mysteries", "director": "Mike Flanagan", "country": "", "rating": "TV-MA"},
        {"title": "Blood & Water", "type": "TV Show", "release_year": 2021, "listed_in": "International TV Shows, TV Dramas, TV Mysteries", "director": null, "country": "South Africa", "rating": "TV-MA"},
        {"title": "Sankofa", "type": "Movie", "release_year": 1993, "listed_in": "Dramas, Independent Movies, International Movies", "director": "Haile Gerima", "country": "United States, Ghana, Burkina Faso, United Kingdom, Germany, Ethiopia", "rating": "TV-MA"},
        {"title": "The Starling", "type": "Movie", "release_year": 2021, "listed_in": "Comedies, Dramas", "director": "Theodore Melfi", "country": "United States", "rating": "PG-13"},
        {"title": "Jeans", "type": "Movie", "release_year": 1998, "listed_in": "Comedies, International Movies, Romantic Movies", "director": "S. Shankar", "country": "India", "rating": "TV-14"},
        {"title": "Grown Ups", "type": "Movie", "release_year": 2010, "listed_in": "Comedies", "director": "Dennis Dugan", "country": "United States", "rating": "PG-13"},
        {"title": "Dark Skies", "type": "Movie", "release_year": 2013, "listed_in": "Horror Movies, Sci-Fi & Fantasy", "director": "Scott Stewart", "country": "United States", "rating": "PG-13"},
        {"title": "Paranoia", "type": "Movie", "release_year": 2013, "listed_in": "Thrillers", "director": "Robert Luketic", "country": "United States, India, France", "rating": "PG-13"},
        {"title": "Undated Drama", "type": "Movie", "release_year": "unknown", "listed_in": "Dramas", "director": "", "country": "United States"},
        {"title": "Hush", "type": "Movie", "release_year": 2016, "listed_in": "Horror Movies, Thrillers", "director": "Mike Flanagan", "country": "United States", "rating": "R"},
        {"title": "Gerald's Game", "type": "Movie", "release_year": 2017, "listed_in": "Horror Movies, Thrillers", "director": "Mike Flanagan", "country": "United States", "rating": "TV-MA"}
    ]"#;

    Catalog::load(parser::parse_json_rows(json).unwrap()).unwrap()
}

fn passing_count(catalog: &Catalog, query: &RecommendationQuery) -> usize {
    let unbounded = RecommendationQuery {
        limit: usize::MAX,
        ..query.clone()
    };
    recommend(catalog, &unbounded).len()
}

#[test]
fn test_results_respect_min_year() {
    let catalog = create_test_catalog();

    for min_year in [1900, 1995, 2010, 2015, 2021, 2030] {
        let query = RecommendationQuery::new(20, min_year).with_country("United States");
        for rec in recommend(&catalog, &query) {
            let year = rec.title.release_year.expect("results always have a year");
            assert!(year >= min_year, "{} ({}) below {}", rec.title.title, year, min_year);
        }
    }
}

#[test]
fn test_length_is_min_of_limit_and_passing() {
    let catalog = create_test_catalog();
    let base = RecommendationQuery::new(1, 1900).with_country("United States");
    let passing = passing_count(&catalog, &base);
    assert_eq!(passing, 7);

    for limit in 1..=10 {
        let query = RecommendationQuery { limit, ..base.clone() };
        assert_eq!(recommend(&catalog, &query).len(), limit.min(passing));
    }
}

#[test]
fn test_recommend_is_idempotent() {
    let catalog = create_test_catalog();
    let query = RecommendationQuery::new(10, 1900).with_genre("Dramas");

    let first = recommend(&catalog, &query);
    let second = recommend(&catalog, &query);
    assert_eq!(first, second);
}

#[test]
fn test_director_ranking() {
    let catalog = create_test_catalog();
    let query = RecommendationQuery::new(10, 2000).with_director("flanagan");

    let results = recommend(&catalog, &query);
    let names: Vec<&str> = results.iter().map(|r| r.title.title.as_str()).collect();

    // Midnight Mass: 3 + 1.5 = 4.5; Gerald's Game: 2 + 1 = 3 (2017); Hush: 2 + 1 = 3 (2016)
    assert_eq!(names, vec!["Midnight Mass", "Gerald's Game", "Hush"]);
}

#[test]
fn test_combined_filters() {
    let catalog = create_test_catalog();
    let query = RecommendationQuery::new(10, 1900)
        .with_genre("Thrillers")
        .with_country("india")
        .with_content_type(ContentTypeFilter::Movie);

    let results = recommend(&catalog, &query);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title.title, "Paranoia");
}

#[test]
fn test_scores_are_sorted_descending() {
    let catalog = create_test_catalog();
    let results = recommend(&catalog, &RecommendationQuery::new(20, 1900));

    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.popularity_score > b.popularity_score
                || (a.popularity_score == b.popularity_score
                    && a.title.release_year >= b.title.release_year)
        );
    }
    // The undated title never appears
    assert!(results.iter().all(|r| r.title.title != "Undated Drama"));
}

#[test]
fn test_serialized_result_is_plain_data() {
    let catalog = create_test_catalog();
    let results = recommend(&catalog, &RecommendationQuery::new(1, 1900).with_genre("TV Horror"));
    let json = serde_json::to_value(&results[0]).unwrap();

    assert_eq!(json["title"], "Midnight Mass");
    assert_eq!(json["type"], "TV Show");
    assert_eq!(json["popularity_score"], 4.5);
    assert_eq!(json["genre_count"], 3);
}

//! Popularity scoring for filtered candidates.
//!
//! The popularity score is a query-time heuristic, never stored on the
//! catalog record:
//!
//! ```text
//! popularity_score = recency_bonus(release_year) + 0.5 * genre_count
//! ```

use data_loader::TitleRecord;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Weight of each genre token in the score
pub const GENRE_WEIGHT: f32 = 0.5;

/// Tiered bonus for newer titles.
///
/// 3 for 2018 and later, 2 for 2015-2017, 1 for 2010-2014, 0 before 2010.
pub fn recency_bonus(year: u16) -> f32 {
    match year {
        2018.. => 3.0,
        2015.. => 2.0,
        2010.. => 1.0,
        _ => 0.0,
    }
}

/// Number of comma-separated genre tokens in the raw `listed_in` text.
///
/// Counts commas plus one, so `"Dramas, "` counts 2. An empty string counts 0.
pub fn genre_count(listed_in: &str) -> usize {
    if listed_in.is_empty() {
        0
    } else {
        listed_in.matches(',').count() + 1
    }
}

/// Full popularity score for a year and raw genre list
pub fn popularity_score(year: u16, listed_in: &str) -> f32 {
    combine(recency_bonus(year), genre_count(listed_in))
}

fn combine(recency_bonus: f32, genre_count: usize) -> f32 {
    recency_bonus + GENRE_WEIGHT * genre_count as f32
}

/// A recommended title with its query-time score breakdown.
///
/// `title` is a copy of the catalog record, so results outlive the snapshot
/// they were computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTitle {
    #[serde(flatten)]
    pub title: TitleRecord,
    pub popularity_score: f32,
    pub recency_bonus: f32,
    pub genre_count: usize,
}

/// Borrowed, scored candidate used while ranking
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scored<'a> {
    pub record: &'a TitleRecord,
    pub year: u16,
    pub recency_bonus: f32,
    pub genre_count: usize,
    pub score: f32,
}

impl Scored<'_> {
    pub(crate) fn to_owned_title(self) -> ScoredTitle {
        ScoredTitle {
            title: self.record.clone(),
            popularity_score: self.score,
            recency_bonus: self.recency_bonus,
            genre_count: self.genre_count,
        }
    }
}

/// Score candidates in parallel, keeping their input order.
///
/// Candidates without a release year are dropped; the minimum-year
/// filter has already removed them in a normal pipeline.
pub(crate) fn score_candidates<'a>(candidates: &[&'a TitleRecord]) -> Vec<Scored<'a>> {
    candidates
        .par_iter()
        .filter_map(|&record| {
            let year = record.release_year?;
            let recency_bonus = recency_bonus(year);
            let genre_count = genre_count(&record.listed_in);
            Some(Scored {
                record,
                year,
                recency_bonus,
                genre_count,
                score: combine(recency_bonus, genre_count),
            })
        })
        .collect()
}

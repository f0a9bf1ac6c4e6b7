//! Aggregate figures over a user's ratings and reviews.

use std::collections::HashMap;

use serde::Serialize;

use reelkeep_store::{RatingMap, ReviewMap};

use crate::enrich::EnrichedItem;

/// Number of genres reported in [`UserStats::top_genres`].
pub const TOP_GENRE_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_ratings: usize,
    pub total_reviews: usize,
    /// Mean rating rounded half-up to one decimal, `0.0` with no ratings.
    pub average_rating: f64,
    pub top_genres: Vec<GenreCount>,
}

impl UserStats {
    pub fn empty() -> Self {
        Self {
            total_ratings: 0,
            total_reviews: 0,
            average_rating: 0.0,
            top_genres: Vec::new(),
        }
    }
}

/// Compute stats from the rating and review maps.
///
/// `enriched` supplies genres for rated items; entries whose key is not
/// rated are ignored. Genres are ranked by count, ties keeping the order in
/// which they were first seen.
pub fn compute_stats(ratings: &RatingMap, reviews: &ReviewMap, enriched: &[EnrichedItem]) -> UserStats {
    let total_ratings = ratings.len();
    let total_reviews = reviews.len();

    let average_rating = if total_ratings == 0 {
        0.0
    } else {
        let sum: u64 = ratings.values().map(|r| u64::from(r.value())).sum();
        let n = total_ratings as u64;
        // round(sum / n, 1) half-up, in whole tenths
        let tenths = (sum * 20 + n) / (2 * n);
        tenths as f64 / 10.0
    };

    let mut counts: Vec<GenreCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for entry in enriched.iter().filter(|e| ratings.contains_key(&e.key)) {
        for genre in &entry.details.genres {
            match index.get(genre.name.as_str()) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(genre.name.as_str(), counts.len());
                    counts.push(GenreCount {
                        genre: genre.name.clone(),
                        count: 1,
                    });
                }
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_GENRE_LIMIT);

    UserStats {
        total_ratings,
        total_reviews,
        average_rating,
        top_genres: counts,
    }
}

#[cfg(test)]
#[path = "tests/stats_tests.rs"]
mod tests;

//! Trending: recent and well rated.
//!
//! `trend = recency * 0.6 + rating / 10 * 0.4`, where recency falls
//! linearly from 1.0 for this year's releases to 0.0 for anything ten or
//! more years old.

use crate::types::{ScoredMovie, movies_of, rank};
use catalog::{MAX_MOVIE_RATING, Movie};
use chrono::{Datelike, Utc};
use tracing::instrument;

pub const RECENCY_WEIGHT: f32 = 0.6;
pub const TREND_RATING_WEIGHT: f32 = 0.4;

/// Age in years at which a movie no longer counts as recent
pub const RECENCY_WINDOW_YEARS: f32 = 10.0;

/// The current calendar year (UTC)
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// How recent a release is, in [0, 1]
pub fn recency_score(year: u16, current_year: i32) -> f32 {
    let age = (current_year - year as i32) as f32;
    (1.0 - (age / RECENCY_WINDOW_YEARS).min(1.0)).clamp(0.0, 1.0)
}

/// Trend score for one movie as of `current_year`
pub fn trend_score(movie: &Movie, current_year: i32) -> f32 {
    recency_score(movie.year, current_year) * RECENCY_WEIGHT
        + (movie.rating / MAX_MOVIE_RATING) * TREND_RATING_WEIGHT
}

/// Scored trending movies as of `current_year`, best first
#[instrument(skip(pool), fields(pool = pool.len()))]
pub fn rank_trending_at(pool: &[Movie], limit: usize, current_year: i32) -> Vec<ScoredMovie<'_>> {
    let scored = pool
        .iter()
        .map(|movie| ScoredMovie::new(movie, trend_score(movie, current_year)))
        .collect();
    rank(scored, limit)
}

/// Top `limit` trending movies as of `current_year`
pub fn get_trending_movies_at(pool: &[Movie], limit: usize, current_year: i32) -> Vec<&Movie> {
    movies_of(rank_trending_at(pool, limit, current_year))
}

/// Top `limit` trending movies as of today
pub fn get_trending_movies(pool: &[Movie], limit: usize) -> Vec<&Movie> {
    get_trending_movies_at(pool, limit, current_year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Genre;

    #[test]
    fn test_recency_score_window() {
        assert_eq!(recency_score(2026, 2026), 1.0);
        assert!((recency_score(2021, 2026) - 0.5).abs() < 1e-6);
        assert_eq!(recency_score(2016, 2026), 0.0);
        assert_eq!(recency_score(1950, 2026), 0.0);
        // Announced for next year: still capped at 1.0
        assert_eq!(recency_score(2027, 2026), 1.0);
    }

    #[test]
    fn test_new_release_beats_old_classic() {
        let pool = vec![
            Movie::new(1, "Classic", 2006, 9.0, vec![Genre::Drama]),
            Movie::new(2, "New Release", 2026, 5.0, vec![Genre::Comedy]),
        ];

        let ranked = rank_trending_at(&pool, 2, 2026);
        assert_eq!(ranked[0].movie.id, 2);
        assert!((ranked[0].score - 0.8).abs() < 1e-6);
        assert!((ranked[1].score - 0.36).abs() < 1e-6);
    }

    #[test]
    fn test_limit_and_rating_tiebreak() {
        let pool = vec![
            Movie::new(1, "A", 1990, 7.0, vec![Genre::Drama]),
            Movie::new(2, "B", 1991, 9.0, vec![Genre::Drama]),
            Movie::new(3, "C", 1992, 8.0, vec![Genre::Drama]),
        ];
        let trending = get_trending_movies_at(&pool, 2, 2026);
        let ids: Vec<u32> = trending.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_uses_current_year() {
        let this_year = current_year() as u16;
        let pool = vec![
            Movie::new(1, "Old", 1980, 9.9, vec![Genre::Drama]),
            Movie::new(2, "Fresh", this_year, 6.0, vec![Genre::Drama]),
        ];
        assert_eq!(get_trending_movies(&pool, 1)[0].id, 2);
    }
}

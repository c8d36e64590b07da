//! Shared types for the recommendation functions.

use catalog::{Movie, MovieId};
use std::cmp::Ordering;

/// Default number of results for "more like this"
pub const DEFAULT_SIMILAR_LIMIT: usize = 6;

/// Default number of personalized recommendations
pub const DEFAULT_PERSONALIZED_LIMIT: usize = 12;

/// Default number of trending movies
pub const DEFAULT_TRENDING_LIMIT: usize = 10;

/// Default minimum critic rating for a random pick
pub const DEFAULT_RANDOM_MIN_RATING: f32 = 7.0;

/// How many results to return and which movies to leave out.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationOptions {
    pub limit: usize,
    pub exclude_ids: Vec<MovieId>,
}

impl RecommendationOptions {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            exclude_ids: Vec::new(),
        }
    }

    /// Configure the result limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Leave these movies out of the results
    pub fn with_excluded(mut self, ids: impl IntoIterator<Item = MovieId>) -> Self {
        self.exclude_ids.extend(ids);
        self
    }

    pub fn is_excluded(&self, movie_id: MovieId) -> bool {
        self.exclude_ids.contains(&movie_id)
    }
}

/// A movie together with the score that ranked it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMovie<'a> {
    pub movie: &'a Movie,
    pub score: f32,
}

impl<'a> ScoredMovie<'a> {
    pub fn new(movie: &'a Movie, score: f32) -> Self {
        Self { movie, score }
    }
}

/// Sort by score, highest first, then keep the top `limit`.
///
/// The sort is stable: equal scores keep their input order.
pub(crate) fn rank(mut scored: Vec<ScoredMovie<'_>>, limit: usize) -> Vec<ScoredMovie<'_>> {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(limit);
    scored
}

/// Drop the scores
pub(crate) fn movies_of<'a>(scored: Vec<ScoredMovie<'a>>) -> Vec<&'a Movie> {
    scored.into_iter().map(|s| s.movie).collect()
}

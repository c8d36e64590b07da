//! The persisted preference aggregate.
//!
//! The JSON layout is fixed:
//!
//! ```json
//! {
//!   "watchlist": [1, 4],
//!   "watched": [2],
//!   "ratings": [{ "movieId": 2, "rating": 5 }],
//!   "recentlyViewed": [4, 2, 1]
//! }
//! ```
//!
//! There is no version field. Missing collections deserialize as empty.

use catalog::MovieId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum number of entries kept in the recently-viewed history
pub const MAX_RECENTLY_VIEWED: usize = 20;

/// Lowest star rating a user can give
pub const MIN_STARS: f32 = 1.0;

/// Highest star rating a user can give
pub const MAX_STARS: f32 = 5.0;

/// A user's star rating for one movie
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRating {
    pub movie_id: MovieId,
    /// 1-5 stars
    pub rating: f32,
}

impl UserRating {
    pub fn new(movie_id: MovieId, rating: f32) -> Self {
        Self { movie_id, rating }
    }
}

/// Everything the browser remembers about one user.
///
/// Invariants (kept by [`PreferenceStore`](crate::PreferenceStore), the
/// only writer):
/// - `watchlist` and `watched` hold each id at most once
/// - `ratings` holds at most one entry per movie
/// - `recently_viewed` is most-recent-first, deduplicated, at most
///   [`MAX_RECENTLY_VIEWED`] long
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub watchlist: Vec<MovieId>,
    pub watched: Vec<MovieId>,
    pub ratings: Vec<UserRating>,
    pub recently_viewed: Vec<MovieId>,
}

impl UserPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every collection is empty
    pub fn is_empty(&self) -> bool {
        self.watchlist.is_empty()
            && self.watched.is_empty()
            && self.ratings.is_empty()
            && self.recently_viewed.is_empty()
    }

    /// The user's star rating for `movie_id`, if any
    pub fn rating_for(&self, movie_id: MovieId) -> Option<f32> {
        self.ratings
            .iter()
            .find(|r| r.movie_id == movie_id)
            .map(|r| r.rating)
    }

    /// Encode as the persisted JSON blob
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode the persisted JSON blob
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Restore the invariants on data that didn't come from the store:
    /// duplicate ids and ratings keep their first occurrence, ratings
    /// outside the star range are dropped, and the history is capped.
    ///
    /// Returns whether anything changed.
    pub fn sanitize(&mut self) -> bool {
        let before = self.clone();

        dedup_in_order(&mut self.watchlist);
        dedup_in_order(&mut self.watched);
        dedup_in_order(&mut self.recently_viewed);
        self.recently_viewed.truncate(MAX_RECENTLY_VIEWED);

        let mut rated = HashSet::new();
        self.ratings.retain(|r| {
            (MIN_STARS..=MAX_STARS).contains(&r.rating) && rated.insert(r.movie_id)
        });

        *self != before
    }
}

fn dedup_in_order(ids: &mut Vec<MovieId>) {
    let mut seen = HashSet::new();
    ids.retain(|&id| seen.insert(id));
}

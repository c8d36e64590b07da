//! Pairwise movie similarity.
//!
//! Three signals, each normalised to [0, 1], combined with fixed weights:
//!
//! | signal | formula                         | weight |
//! |--------|---------------------------------|--------|
//! | genre  | Jaccard index of genre sets     | 0.60   |
//! | rating | `1 - |r1 - r2| / 10`            | 0.25   |
//! | year   | `max(0, 1 - |y1 - y2| / 50)`    | 0.15   |
//!
//! Changing the weights changes every ranking built on top of them.

use catalog::{Genre, MAX_MOVIE_RATING, Movie};
use std::collections::HashSet;

pub const GENRE_WEIGHT: f32 = 0.6;
pub const RATING_WEIGHT: f32 = 0.25;
pub const YEAR_WEIGHT: f32 = 0.15;

/// Release years further apart than this share no year similarity
pub const MAX_YEAR_DISTANCE: f32 = 50.0;

/// Jaccard similarity of the two genre sets.
///
/// Returns 0.0 when both movies have no genres at all.
pub fn genre_similarity(a: &Movie, b: &Movie) -> f32 {
    let genres_a: HashSet<Genre> = a.genres.iter().copied().collect();
    let genres_b: HashSet<Genre> = b.genres.iter().copied().collect();

    let intersection = genres_a.intersection(&genres_b).count() as f32;
    let union = genres_a.union(&genres_b).count() as f32;
    if union == 0.0 {
        0.0
    } else {
        intersection / union
    }
}

/// Closer critic ratings score higher
pub fn rating_similarity(a: &Movie, b: &Movie) -> f32 {
    let diff = (a.rating - b.rating).abs();
    (1.0 - diff / MAX_MOVIE_RATING).clamp(0.0, 1.0)
}

/// Closer release years score higher; 50+ years apart scores 0
pub fn year_similarity(a: &Movie, b: &Movie) -> f32 {
    let diff = (a.year as i32 - b.year as i32).abs() as f32;
    (1.0 - diff / MAX_YEAR_DISTANCE).max(0.0)
}

/// Weighted combination of genre, rating and year similarity, in [0, 1]
pub fn similarity(a: &Movie, b: &Movie) -> f32 {
    let score = genre_similarity(a, b) * GENRE_WEIGHT
        + rating_similarity(a, b) * RATING_WEIGHT
        + year_similarity(a, b) * YEAR_WEIGHT;
    // f32 weights sum to slightly over 1.0
    score.min(1.0)
}

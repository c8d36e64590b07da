//! Filter to ensure a minimum quality threshold.

use crate::traits::Filter;
use catalog::Movie;

/// Removes movies rated below `min_rating`.
pub struct MinimumRatingFilter {
    min_rating: f32,
}

impl MinimumRatingFilter {
    /// # Arguments
    /// * `min_rating` - Lowest critic rating (0-10) that passes, inclusive
    pub fn new(min_rating: f32) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.rating >= self.min_rating
    }
}

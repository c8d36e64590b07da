//! Filter on an inclusive critic-rating range.

use crate::traits::Filter;
use catalog::Movie;

/// Keeps movies with `min <= rating <= max`.
pub struct RatingRangeFilter {
    min: f32,
    max: f32,
}

impl RatingRangeFilter {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

impl Filter for RatingRangeFilter {
    fn name(&self) -> &str {
        "RatingRangeFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.rating >= self.min && movie.rating <= self.max
    }
}

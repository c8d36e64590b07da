//! The FilterPipeline chains filters together.
//!
//! This module provides the FilterPipeline struct that applies multiple
//! filters in sequence using the builder pattern.

use crate::traits::Filter;
use catalog::Movie;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchFilter::new("nolan"))
///     .add_filter(GenreFilter::new([Genre::SciFi]))
///     .add_filter(RatingRangeFilter::new(8.0, 10.0));
///
/// let kept = pipeline.apply(catalog.movies().iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence.
    ///
    /// Order is preserved; each filter only sees what the previous one kept.
    pub fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

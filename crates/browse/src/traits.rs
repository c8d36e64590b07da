//! Core traits for the browse pipeline.
//!
//! This module defines the Filter trait that lets search, genre, year and
//! rating criteria be composed into one pass over the catalog.

use catalog::Movie;

/// Core trait for narrowing down a list of movies.
///
/// ## Design Note
/// - `Send + Sync` so a built pipeline can be shared across threads
/// - Filters take ownership of the Vec and return the kept subset,
///   preserving order
/// - Movies are borrowed from the catalog, never cloned
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single movie passes this filter
    fn matches(&self, movie: &Movie) -> bool;

    /// Apply this filter to a set of movies.
    ///
    /// The default keeps every movie for which [`Filter::matches`] is true.
    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        movies.into_iter().filter(|movie| self.matches(movie)).collect()
    }
}

//! Filter to remove specific movies, e.g. ones the user has already watched.

use crate::traits::Filter;
use catalog::{Movie, MovieId};
use std::collections::HashSet;

/// Removes movies whose id is in the excluded set.
///
/// ## Algorithm
/// Uses a HashSet for O(1) lookups.
pub struct ExcludeIdsFilter {
    excluded: HashSet<MovieId>,
}

impl ExcludeIdsFilter {
    pub fn new(ids: impl IntoIterator<Item = MovieId>) -> Self {
        Self {
            excluded: ids.into_iter().collect(),
        }
    }
}

impl Filter for ExcludeIdsFilter {
    fn name(&self) -> &str {
        "ExcludeIdsFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        !self.excluded.contains(&movie.id)
    }
}

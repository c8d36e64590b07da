//! Filter to keep only movies in the selected genres.

use crate::traits::Filter;
use catalog::{Genre, Movie};

/// Keeps movies tagged with ANY of the selected genres.
///
/// An empty selection keeps everything.
pub struct GenreFilter {
    genres: Vec<Genre>,
}

impl GenreFilter {
    pub fn new(genres: impl IntoIterator<Item = Genre>) -> Self {
        Self {
            genres: genres.into_iter().collect(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        self.genres.is_empty() || self.genres.iter().any(|&genre| movie.has_genre(genre))
    }
}

//! Free-text search over title, plot, director and cast.

use crate::traits::Filter;
use catalog::Movie;

/// Case-insensitive substring search.
///
/// A movie matches if the query appears in its title, plot, director or
/// any cast member's name. A blank query matches everything.
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.needle.is_empty()
    }
}

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        if self.is_blank() {
            return true;
        }
        let hit = |text: &str| text.to_lowercase().contains(&self.needle);

        hit(movie.title.as_str())
            || hit(movie.plot.as_str())
            || hit(movie.director.as_str())
            || movie.cast.iter().any(|actor| hit(actor.as_str()))
    }
}

//! Catalog building and indexing logic.
//!
//! Turns a parsed list of movies into a [`Catalog`]:
//! - Check ids are unique and build the id index
//! - Build secondary indices (genre, year)
//! - Answer a few whole-catalog questions (featured movie, genre list, year span)

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load and index a catalog file.
    ///
    /// Steps:
    /// 1. Parse and validate every record
    /// 2. Build the id index (rejecting duplicate ids)
    /// 3. Build secondary indices (genre, year)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {}", path.display());
        let movies = parser::parse_catalog_file(path)?;
        let catalog = Self::from_movies(movies)?;
        info!("Catalog loaded: {} movies", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from movies that are already in memory.
    ///
    /// Records are validated with the same rules as catalog files.
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        let mut catalog = Catalog::new();

        for movie in movies {
            parser::validate_movie(&movie)?;
            if catalog.id_index.contains_key(&movie.id) {
                return Err(CatalogError::DuplicateId(movie.id));
            }
            catalog.id_index.insert(movie.id, catalog.movies.len());
            catalog.movies.push(movie);
        }

        catalog.build_secondary_indices();
        Ok(catalog)
    }

    /// Build the genre and year indices after the primary data is loaded
    pub fn build_secondary_indices(&mut self) {
        self.genre_index.clear();
        self.year_index.clear();

        for movie in &self.movies {
            for &genre in &movie.genres {
                self.genre_index
                    .entry(genre)
                    .or_insert_with(Vec::new)
                    .push(movie.id);
            }

            self.year_index
                .entry(movie.year)
                .or_insert_with(Vec::new)
                .push(movie.id);
        }
    }

    /// The headline movie: highest rated, earliest in the catalog on ties.
    pub fn featured(&self) -> Option<&Movie> {
        self.movies.iter().reduce(|best, movie| {
            if movie.rating > best.rating { movie } else { best }
        })
    }

    /// Every genre that at least one movie carries, in display order
    pub fn all_genres(&self) -> Vec<Genre> {
        let present: BTreeSet<Genre> = self.genre_index.keys().copied().collect();
        present.into_iter().collect()
    }

    /// Earliest and latest release years, or `None` for an empty catalog
    pub fn year_bounds(&self) -> Option<(u16, u16)> {
        let first = self.year_index.keys().next()?;
        let last = self.year_index.keys().next_back()?;
        Some((*first, *last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_movies() -> Vec<Movie> {
        vec![
            Movie::new(1, "The Shawshank Redemption", 1994, 9.3, vec![Genre::Drama]),
            Movie::new(2, "The Godfather", 1972, 9.2, vec![Genre::Crime, Genre::Drama]),
            Movie::new(3, "The Dark Knight", 2008, 9.0, vec![Genre::Action, Genre::Crime, Genre::Drama]),
            Movie::new(4, "Pulp Fiction", 1994, 8.9, vec![Genre::Crime, Genre::Drama]),
        ]
    }

    #[test]
    fn test_from_movies_builds_indices() {
        let catalog = Catalog::from_movies(sample_movies()).unwrap();

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get_movie(3).unwrap().title, "The Dark Knight");
        assert_eq!(catalog.get_movies_by_genre(Genre::Crime), &[2, 3, 4]);
        assert_eq!(catalog.get_movies_by_year(1994), &[1, 4]);
        assert!(catalog.get_movies_by_genre(Genre::Western).is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut movies = sample_movies();
        movies.push(Movie::new(2, "Another Godfather", 1974, 9.0, vec![Genre::Crime]));

        let err = Catalog::from_movies(movies).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(2)));
    }

    #[test]
    fn test_featured_prefers_first_on_ties() {
        let movies = vec![
            Movie::new(10, "First", 2000, 8.0, vec![Genre::Drama]),
            Movie::new(11, "Second", 2001, 8.0, vec![Genre::Drama]),
            Movie::new(12, "Third", 2002, 7.5, vec![Genre::Drama]),
        ];
        let catalog = Catalog::from_movies(movies).unwrap();
        assert_eq!(catalog.featured().unwrap().id, 10);
        assert!(Catalog::new().featured().is_none());
    }

    #[test]
    fn test_get_movies_keeps_order_and_skips_unknown() {
        let catalog = Catalog::from_movies(sample_movies()).unwrap();
        let ids: Vec<MovieId> = catalog
            .get_movies(&[4, 99, 1])
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![4, 1]);
    }

    #[test]
    fn test_genres_and_year_bounds() {
        let catalog = Catalog::from_movies(sample_movies()).unwrap();
        assert_eq!(catalog.all_genres(), vec![Genre::Action, Genre::Crime, Genre::Drama]);
        assert_eq!(catalog.year_bounds(), Some((1972, 2008)));
        assert_eq!(Catalog::new().year_bounds(), None);
    }
}

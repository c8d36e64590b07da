//! # Catalog Crate
//!
//! Loads and indexes the static movie table the browser works over.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Genre, Catalog)
//! - **parser**: Parse and validate JSON catalog files
//! - **index**: Build the id/genre/year indices
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/movies.json"))?;
//!
//! let movie = catalog.get_movie(1).unwrap();
//! let dramas = catalog.get_movies_by_genre(catalog::Genre::Drama);
//! println!("{} is one of {} dramas", movie.title, dramas.len());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{CatalogError, Result};
pub use parser::{parse_catalog, parse_catalog_file, MAX_MOVIE_RATING};
pub use types::{Catalog, Genre, Movie, MovieId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.get_movie(1).is_none());
        assert!(catalog.get_movies_by_genre(Genre::Drama).is_empty());
    }

    #[test]
    fn test_genre_round_trip_through_strings() {
        for genre in Genre::ALL {
            let parsed: Genre = genre.to_string().parse().unwrap();
            assert_eq!(parsed, genre);
        }
    }

    #[test]
    fn test_genre_parse_is_lenient() {
        assert_eq!("sci-fi".parse::<Genre>().unwrap(), Genre::SciFi);
        assert_eq!("SCIFI".parse::<Genre>().unwrap(), Genre::SciFi);
        assert_eq!("film noir".parse::<Genre>().unwrap(), Genre::FilmNoir);
        assert!("space opera".parse::<Genre>().is_err());
    }

    #[test]
    fn test_movie_summary_falls_back_to_plot() {
        let mut movie = Movie::new(1, "Heat", 1995, 8.3, vec![Genre::Crime]).with_plot("A heist.");
        assert_eq!(movie.summary(), "A heist.");

        movie.description = Some("Cops and robbers.".to_string());
        assert_eq!(movie.summary(), "Cops and robbers.");
    }
}

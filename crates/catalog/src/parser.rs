//! Parser for catalog files.
//!
//! A catalog file is a JSON array of movie objects:
//!
//! ```json
//! [
//!   { "id": 1, "title": "The Shawshank Redemption", "year": 1994,
//!     "rating": 9.3, "genres": ["Drama"], "director": "Frank Darabont",
//!     "cast": ["Tim Robbins", "Morgan Freeman"], "runtime": 142 }
//! ]
//! ```
//!
//! Parsing checks each record on its own; cross-record checks (duplicate
//! ids) happen when the [`Catalog`](crate::Catalog) is built.

use crate::error::{CatalogError, Result};
use crate::types::Movie;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Highest critic rating a movie can carry
pub const MAX_MOVIE_RATING: f32 = 10.0;

/// Parse a catalog from a JSON string
pub fn parse_catalog(json: &str) -> Result<Vec<Movie>> {
    let movies: Vec<Movie> = serde_json::from_str(json)?;
    for movie in &movies {
        validate_movie(movie)?;
    }
    Ok(movies)
}

/// Read and parse a catalog file
pub fn parse_catalog_file(path: &Path) -> Result<Vec<Movie>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;
    parse_catalog(&content)
}

/// Check a single record against the catalog rules:
/// - title is not blank
/// - rating is a finite number within 0-10
/// - at least one genre (genre similarity is undefined otherwise)
pub fn validate_movie(movie: &Movie) -> Result<()> {
    if movie.title.trim().is_empty() {
        return Err(invalid(movie, "title", "<empty>"));
    }
    if !movie.rating.is_finite() || !(0.0..=MAX_MOVIE_RATING).contains(&movie.rating) {
        return Err(invalid(movie, "rating", movie.rating));
    }
    if movie.genres.is_empty() {
        return Err(invalid(movie, "genres", "[]"));
    }
    Ok(())
}

fn invalid(movie: &Movie, field: &str, value: impl ToString) -> CatalogError {
    CatalogError::InvalidValue {
        id: movie.id,
        field: field.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Genre;

    const SAMPLE: &str = r#"[
        {
            "id": 1,
            "title": "The Shawshank Redemption",
            "year": 1994,
            "rating": 9.3,
            "genres": ["Drama"],
            "poster": "https://example.com/shawshank.jpg",
            "director": "Frank Darabont",
            "cast": ["Tim Robbins", "Morgan Freeman", "Bob Gunton"],
            "runtime": 142,
            "plot": "Two imprisoned men bond over a number of years."
        },
        {
            "id": 2,
            "title": "Inception",
            "year": 2010,
            "rating": 8.8,
            "genres": ["Action", "Adventure", "Sci-Fi"],
            "director": "Christopher Nolan",
            "cast": ["Leonardo DiCaprio"],
            "runtime": 148,
            "releaseDate": "2010-07-16",
            "boxOffice": "$836.8M"
        }
    ]"#;

    #[test]
    fn test_parse_catalog() {
        let movies = parse_catalog(SAMPLE).unwrap();
        assert_eq!(movies.len(), 2);

        assert_eq!(movies[0].title, "The Shawshank Redemption");
        assert_eq!(movies[0].cast.len(), 3);
        assert_eq!(movies[0].backdrop, None);

        assert_eq!(movies[1].genres, vec![Genre::Action, Genre::Adventure, Genre::SciFi]);
        assert_eq!(movies[1].release_date, "2010-07-16");
        assert_eq!(movies[1].box_office.as_deref(), Some("$836.8M"));
    }

    #[test]
    fn test_unknown_genre_is_rejected() {
        let json = r#"[{ "id": 1, "title": "X", "year": 2000, "rating": 5.0, "genres": ["Space Opera"] }]"#;
        let err = parse_catalog(json).unwrap_err();
        assert!(matches!(err, CatalogError::ParseError(_)));
        assert!(err.to_string().contains("Space Opera"));
    }

    #[test]
    fn test_rating_out_of_range() {
        let json = r#"[{ "id": 4, "title": "X", "year": 2000, "rating": 11.0, "genres": ["Drama"] }]"#;
        let err = parse_catalog(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidValue { id: 4, ref field, .. } if field == "rating"
        ));
    }

    #[test]
    fn test_empty_genres_rejected() {
        let json = r#"[{ "id": 9, "title": "X", "year": 2000, "rating": 5.0, "genres": [] }]"#;
        let err = parse_catalog(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidValue { id: 9, ref field, .. } if field == "genres"
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_catalog_file(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound { .. }));
    }
}

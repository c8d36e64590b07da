//! End-to-end session tests over a catalog parsed from JSON and
//! preferences stored on disk.

use std::sync::Arc;

use anyhow::Result;
use browse::{FilterState, SortBy};
use catalog::{Catalog, Genre, MovieId, parse_catalog};
use preferences::FileStorage;
use session::{BrowserSession, SessionError};

const CATALOG_JSON: &str = r#"[
  {"id": 1, "title": "Arrival", "year": 2016, "rating": 7.9, "genres": ["Drama", "Sci-Fi"],
   "director": "Denis Villeneuve", "cast": ["Amy Adams", "Jeremy Renner"],
   "plot": "A linguist works with the military to communicate with alien lifeforms."},
  {"id": 2, "title": "Dune", "year": 2021, "rating": 8.0, "genres": ["Action", "Adventure", "Sci-Fi"],
   "director": "Denis Villeneuve", "cast": ["Timothée Chalamet", "Rebecca Ferguson"]},
  {"id": 3, "title": "Sicario", "year": 2015, "rating": 7.6, "genres": ["Action", "Crime", "Drama"],
   "director": "Denis Villeneuve", "cast": ["Emily Blunt", "Benicio Del Toro"]},
  {"id": 4, "title": "Heat", "year": 1995, "rating": 8.3, "genres": ["Action", "Crime", "Drama"],
   "director": "Michael Mann", "cast": ["Al Pacino", "Robert De Niro"]},
  {"id": 5, "title": "Amélie", "year": 2001, "rating": 8.3, "genres": ["Comedy", "Romance"],
   "director": "Jean-Pierre Jeunet", "cast": ["Audrey Tautou"]}
]"#;

fn build_catalog() -> Arc<Catalog> {
    let movies = parse_catalog(CATALOG_JSON).unwrap();
    Arc::new(Catalog::from_movies(movies).unwrap())
}

fn ids<'a>(movies: impl IntoIterator<Item = &'a catalog::Movie>) -> Vec<MovieId> {
    movies.into_iter().map(|m| m.id).collect()
}

#[test]
fn test_state_survives_a_restart() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let catalog = build_catalog();

    {
        let mut session = BrowserSession::open(Arc::clone(&catalog), FileStorage::new(dir.path()));
        session.toggle_watchlist(2)?;
        session.toggle_watched(4)?;
        session.rate(4, 5.0)?;
        session.open_movie(1)?;
        session.open_movie(3)?;
    }

    let session = BrowserSession::open(catalog, FileStorage::new(dir.path()));
    assert_eq!(ids(session.watchlist_movies()), vec![2]);
    assert_eq!(ids(session.watched_movies()), vec![4]);
    assert_eq!(session.store().get_movie_rating(4), Some(5.0));
    assert_eq!(ids(session.recently_viewed_movies()), vec![3, 1]);
    Ok(())
}

#[test]
fn test_details_page() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = BrowserSession::open(build_catalog(), FileStorage::new(dir.path()));

    let details = session.open_movie(1)?;
    assert_eq!(details.movie.director, "Denis Villeneuve");
    assert_eq!(ids(&details.more_from_director), vec![2, 3]);
    assert!(details.similar.len() <= 6);
    assert!(details.similar.iter().all(|m| m.id != 1));
    // Sicario shares one genre with Arrival and is a year apart
    assert_eq!(details.similar[0].id, 3);
    assert_eq!(details.user_rating, None);
    Ok(())
}

#[test]
fn test_unknown_movie_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = BrowserSession::open(build_catalog(), FileStorage::new(dir.path()));

    let err = session.open_movie(404).unwrap_err();
    assert!(matches!(err, SessionError::MovieNotFound(404)));
    assert_eq!(err.to_string(), "Movie 404 is not in the catalog");
}

#[test]
fn test_browse_through_session() {
    let dir = tempfile::tempdir().unwrap();
    let session = BrowserSession::open(build_catalog(), FileStorage::new(dir.path()));

    let mut filters = FilterState::new(2026);
    filters.toggle_genre(Genre::Crime);
    let found = session.browse("", &filters, SortBy::Year);
    assert_eq!(ids(found), vec![3, 4]);

    let found = session.browse("villeneuve", &FilterState::new(2026), SortBy::Rating);
    assert_eq!(ids(found), vec![2, 1, 3]);
}

#[test]
fn test_recommendations_react_to_ratings() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = BrowserSession::open(build_catalog(), FileStorage::new(dir.path()));

    session.rate(5, 5.0)?;
    let home = session.home();
    assert_eq!(home.featured.map(|m| m.id), Some(4));
    assert!(!home.recommended.iter().any(|m| m.id == 5));
    Ok(())
}

#[test]
fn test_reset_clears_saved_state() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let catalog = build_catalog();

    {
        let mut session = BrowserSession::open(Arc::clone(&catalog), FileStorage::new(dir.path()));
        session.toggle_watchlist(2)?;
        session.rate(4, 3.0)?;
        session.open_movie(5)?;
        session.store_mut().reset();
    }

    let session = BrowserSession::open(catalog, FileStorage::new(dir.path()));
    assert!(session.store().preferences().is_empty());
    assert!(session.watchlist_movies().is_empty());
    assert!(session.recently_viewed_movies().is_empty());
    Ok(())
}

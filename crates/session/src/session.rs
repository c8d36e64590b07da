//! # Browser Session
//!
//! Coordinates the catalog, one user's preference store and the
//! recommendation functions:
//! 1. The home page (featured, trending and personalized rows)
//! 2. The user's lists (watchlist, watched, recently viewed)
//! 3. Search and filter results
//! 4. The movie details page, which also records the view
//!
//! Every view is recomputed from the current catalog and preferences, so
//! it reflects the latest mutation without any cache invalidation.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use browse::{FilterState, SortBy};
use catalog::{Catalog, Movie, MovieId};
use preferences::{PreferenceStore, StorageBackend};
use recommend::{
    DEFAULT_PERSONALIZED_LIMIT, DEFAULT_SIMILAR_LIMIT, DEFAULT_TRENDING_LIMIT,
    RecommendationOptions,
};

use crate::error::{Result, SessionError};

/// Most recently viewed movies shown on the history row
pub const RECENTLY_VIEWED_DISPLAY_LIMIT: usize = 12;

/// The rows of the home page
#[derive(Debug, Clone)]
pub struct HomeView<'a> {
    /// Highest-rated movie, `None` for an empty catalog
    pub featured: Option<&'a Movie>,
    pub trending: Vec<&'a Movie>,
    pub recommended: Vec<&'a Movie>,
}

/// Everything the details page shows for one movie
#[derive(Debug, Clone)]
pub struct MovieDetails {
    pub movie: Movie,
    pub similar: Vec<Movie>,
    /// Other movies by the same director
    pub more_from_director: Vec<Movie>,
    pub user_rating: Option<f32>,
    pub in_watchlist: bool,
    pub watched: bool,
}

/// One user's view of the catalog.
pub struct BrowserSession<B: StorageBackend> {
    catalog: Arc<Catalog>,
    store: PreferenceStore<B>,
}

impl<B: StorageBackend> BrowserSession<B> {
    pub fn new(catalog: Arc<Catalog>, store: PreferenceStore<B>) -> Self {
        info!(
            "Session started: {} movies, {} watchlisted, {} watched, {} rated",
            catalog.len(),
            store.watchlist().len(),
            store.watched().len(),
            store.ratings().len()
        );
        Self { catalog, store }
    }

    /// Load the user's preferences from `backend` and start a session
    pub fn open(catalog: Arc<Catalog>, backend: B) -> Self {
        Self::new(catalog, PreferenceStore::load(backend))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &PreferenceStore<B> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PreferenceStore<B> {
        &mut self.store
    }

    /// Build the home page rows
    pub fn home(&self) -> HomeView<'_> {
        let start_time = Instant::now();
        let movies = self.catalog.movies();

        let featured = self.catalog.featured();
        let trending = recommend::get_trending_movies(movies, DEFAULT_TRENDING_LIMIT);
        let recommended = recommend::recommend_for(
            movies,
            self.store.preferences(),
            &RecommendationOptions::new(DEFAULT_PERSONALIZED_LIMIT),
        );

        debug!(
            "Home page: featured={:?}, trending={}, recommended={} in {:.2?}",
            featured.map(|m| m.id),
            trending.len(),
            recommended.len(),
            start_time.elapsed()
        );

        HomeView {
            featured,
            trending,
            recommended,
        }
    }

    /// Watchlisted movies, in catalog order
    pub fn watchlist_movies(&self) -> Vec<&Movie> {
        self.movies_where(|id| self.store.is_in_watchlist(id))
    }

    /// Watched movies, in catalog order
    pub fn watched_movies(&self) -> Vec<&Movie> {
        self.movies_where(|id| self.store.is_watched(id))
    }

    /// Recently viewed movies, most recent first.
    ///
    /// Ids that are no longer in the catalog are skipped.
    pub fn recently_viewed_movies(&self) -> Vec<&Movie> {
        let mut movies = self.catalog.get_movies(self.store.recently_viewed());
        movies.truncate(RECENTLY_VIEWED_DISPLAY_LIMIT);
        movies
    }

    /// Search, filter and sort the whole catalog
    pub fn browse(&self, query: &str, filters: &FilterState, sort: SortBy) -> Vec<&Movie> {
        browse::browse(self.catalog.movies(), query, filters, sort)
    }

    /// Open the details page for `movie_id`.
    ///
    /// Moves the movie to the front of the recently-viewed history.
    pub fn open_movie(&mut self, movie_id: MovieId) -> Result<MovieDetails> {
        let movie = self
            .catalog
            .get_movie(movie_id)
            .ok_or(SessionError::MovieNotFound(movie_id))?;

        self.store.add_to_recently_viewed(movie_id);

        let movies = self.catalog.movies();
        let similar = recommend::get_similar_movies(
            movie,
            movies,
            &RecommendationOptions::new(DEFAULT_SIMILAR_LIMIT),
        );
        let more_from_director =
            recommend::get_movies_by_director(&movie.director, movies, Some(movie_id));

        info!("Opened '{}' ({} similar movies)", movie.title, similar.len());

        Ok(MovieDetails {
            movie: movie.clone(),
            similar: similar.into_iter().cloned().collect(),
            more_from_director: more_from_director.into_iter().cloned().collect(),
            user_rating: self.store.get_movie_rating(movie_id),
            in_watchlist: self.store.is_in_watchlist(movie_id),
            watched: self.store.is_watched(movie_id),
        })
    }

    /// A random movie rated at least `min_rating` that the user hasn't watched
    pub fn surprise_me(&self, min_rating: f32) -> Option<&Movie> {
        recommend::get_random_movie(self.catalog.movies(), min_rating, self.store.watched())
    }

    /// Rate a movie that exists in the catalog
    pub fn rate(&mut self, movie_id: MovieId, stars: f32) -> Result<()> {
        self.require_movie(movie_id)?;
        self.store.rate_movie(movie_id, stars)?;
        Ok(())
    }

    /// Toggle watchlist membership of a movie that exists in the catalog.
    ///
    /// Returns the new membership.
    pub fn toggle_watchlist(&mut self, movie_id: MovieId) -> Result<bool> {
        self.require_movie(movie_id)?;
        self.store.toggle_watchlist(movie_id);
        Ok(self.store.is_in_watchlist(movie_id))
    }

    /// Toggle the watched flag of a movie that exists in the catalog.
    ///
    /// Returns the new flag.
    pub fn toggle_watched(&mut self, movie_id: MovieId) -> Result<bool> {
        self.require_movie(movie_id)?;
        self.store.toggle_watched(movie_id);
        Ok(self.store.is_watched(movie_id))
    }

    fn require_movie(&self, movie_id: MovieId) -> Result<&Movie> {
        self.catalog
            .get_movie(movie_id)
            .ok_or(SessionError::MovieNotFound(movie_id))
    }

    fn movies_where(&self, keep: impl Fn(MovieId) -> bool) -> Vec<&Movie> {
        self.catalog
            .movies()
            .iter()
            .filter(|movie| keep(movie.id))
            .collect()
    }
}

impl<B: StorageBackend> std::fmt::Debug for BrowserSession<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserSession")
            .field("movies", &self.catalog.len())
            .field("preferences", self.store.preferences())
            .finish()
    }
}

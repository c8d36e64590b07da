//! The preference store: sole owner and writer of [`UserPreferences`].
//!
//! ## Lifecycle
//! 1. [`PreferenceStore::load`] reads the blob from the backend, falling
//!    back to empty preferences if it is missing or malformed
//! 2. Mutators update the in-memory aggregate
//! 3. After every mutation the whole aggregate is written back and
//!    subscribers are notified
//!
//! Write failures during a mutation are logged, never returned. Call
//! [`PreferenceStore::persist`] directly to observe them.

use crate::error::{PreferencesError, Result};
use crate::storage::StorageBackend;
use crate::types::{MAX_RECENTLY_VIEWED, MAX_STARS, MIN_STARS, UserPreferences, UserRating};
use catalog::MovieId;
use tracing::{debug, warn};

/// Fixed key the preferences blob is stored under
pub const STORAGE_KEY: &str = "movie-app-preferences";

/// Callback invoked with the new state after each mutation
pub type ChangeListener = Box<dyn Fn(&UserPreferences) + Send + Sync>;

/// Owns a user's preferences and keeps the backend in sync with them.
pub struct PreferenceStore<B: StorageBackend> {
    backend: B,
    preferences: UserPreferences,
    listeners: Vec<ChangeListener>,
}

impl<B: StorageBackend> PreferenceStore<B> {
    /// Load preferences from `backend`, or start empty.
    ///
    /// Never fails: absent data, unreadable storage and malformed JSON all
    /// produce empty preferences. Well-formed data that breaks the
    /// invariants is cleaned with [`UserPreferences::sanitize`].
    pub fn load(backend: B) -> Self {
        let preferences = match backend.get_item(STORAGE_KEY) {
            Ok(Some(blob)) => match UserPreferences::from_json(&blob) {
                Ok(mut prefs) => {
                    if prefs.sanitize() {
                        warn!("Stored preferences had duplicate or out-of-range entries, cleaned them up");
                    }
                    prefs
                }
                Err(e) => {
                    warn!("Discarding malformed stored preferences: {}", e);
                    UserPreferences::default()
                }
            },
            Ok(None) => {
                debug!("No stored preferences under {}, starting empty", STORAGE_KEY);
                UserPreferences::default()
            }
            Err(e) => {
                warn!("Failed to read stored preferences: {}", e);
                UserPreferences::default()
            }
        };

        Self {
            backend,
            preferences,
            listeners: Vec::new(),
        }
    }

    /// Register a callback that runs after every mutation
    pub fn subscribe(&mut self, listener: impl Fn(&UserPreferences) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Write the whole aggregate to the backend
    pub fn persist(&self) -> Result<()> {
        let blob = self.preferences.to_json()?;
        self.backend.set_item(STORAGE_KEY, &blob)
    }

    /// Clear everything, in memory and in storage
    pub fn reset(&mut self) {
        self.preferences = UserPreferences::default();
        self.commit();
    }

    // Accessors

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    pub fn watchlist(&self) -> &[MovieId] {
        &self.preferences.watchlist
    }

    pub fn watched(&self) -> &[MovieId] {
        &self.preferences.watched
    }

    pub fn ratings(&self) -> &[UserRating] {
        &self.preferences.ratings
    }

    pub fn recently_viewed(&self) -> &[MovieId] {
        &self.preferences.recently_viewed
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_in_watchlist(&self, movie_id: MovieId) -> bool {
        self.preferences.watchlist.contains(&movie_id)
    }

    pub fn is_watched(&self, movie_id: MovieId) -> bool {
        self.preferences.watched.contains(&movie_id)
    }

    pub fn get_movie_rating(&self, movie_id: MovieId) -> Option<f32> {
        self.preferences.rating_for(movie_id)
    }

    // Mutators

    /// Add to the watchlist; already-present ids stay where they are
    pub fn add_to_watchlist(&mut self, movie_id: MovieId) {
        insert_unique(&mut self.preferences.watchlist, movie_id);
        self.commit();
    }

    pub fn remove_from_watchlist(&mut self, movie_id: MovieId) {
        self.preferences.watchlist.retain(|&id| id != movie_id);
        self.commit();
    }

    pub fn toggle_watchlist(&mut self, movie_id: MovieId) {
        if self.is_in_watchlist(movie_id) {
            self.remove_from_watchlist(movie_id);
        } else {
            self.add_to_watchlist(movie_id);
        }
    }

    pub fn mark_as_watched(&mut self, movie_id: MovieId) {
        insert_unique(&mut self.preferences.watched, movie_id);
        self.commit();
    }

    pub fn mark_as_unwatched(&mut self, movie_id: MovieId) {
        self.preferences.watched.retain(|&id| id != movie_id);
        self.commit();
    }

    pub fn toggle_watched(&mut self, movie_id: MovieId) {
        if self.is_watched(movie_id) {
            self.mark_as_unwatched(movie_id);
        } else {
            self.mark_as_watched(movie_id);
        }
    }

    /// Set the user's star rating for a movie, replacing any earlier one.
    ///
    /// Values outside 1-5 (or NaN) are rejected and leave the state untouched.
    pub fn rate_movie(&mut self, movie_id: MovieId, rating: f32) -> Result<()> {
        if !(MIN_STARS..=MAX_STARS).contains(&rating) {
            return Err(PreferencesError::RatingOutOfRange { movie_id, rating });
        }

        let ratings = &mut self.preferences.ratings;
        match ratings.iter_mut().find(|r| r.movie_id == movie_id) {
            Some(existing) => existing.rating = rating,
            None => ratings.push(UserRating::new(movie_id, rating)),
        }
        self.commit();
        Ok(())
    }

    /// Move `movie_id` to the front of the history, dropping the oldest
    /// entries past the cap
    pub fn add_to_recently_viewed(&mut self, movie_id: MovieId) {
        let history = &mut self.preferences.recently_viewed;
        history.retain(|&id| id != movie_id);
        history.insert(0, movie_id);
        history.truncate(MAX_RECENTLY_VIEWED);
        self.commit();
    }

    /// Persist, then notify. Persistence failures are logged only.
    fn commit(&self) {
        if let Err(e) = self.persist() {
            warn!("Failed to persist preferences: {}", e);
        }
        for listener in &self.listeners {
            listener(&self.preferences);
        }
    }
}

impl<B: StorageBackend + std::fmt::Debug> std::fmt::Debug for PreferenceStore<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("backend", &self.backend)
            .field("preferences", &self.preferences)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn insert_unique(ids: &mut Vec<MovieId>, movie_id: MovieId) {
    if !ids.contains(&movie_id) {
        ids.push(movie_id);
    }
}

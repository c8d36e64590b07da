//! Error types for the preferences crate.

use catalog::MovieId;
use thiserror::Error;

/// Errors surfaced by the preference store and its storage backends.
///
/// Note that most storage failures never reach callers of the store's
/// mutators: they are logged and swallowed. These variants show up from
/// the explicit [`persist`](crate::PreferenceStore::persist) call and from
/// backends used directly.
#[derive(Error, Debug)]
pub enum PreferencesError {
    /// Star ratings must be within 1-5
    #[error("Rating {rating} for movie {movie_id} is outside the 1-5 star range")]
    RatingOutOfRange { movie_id: MovieId, rating: f32 },

    /// Backend I/O failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Preferences couldn't be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A backend-specific failure (poisoned lock, read-only storage, ...)
    #[error("Storage backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, PreferencesError>;

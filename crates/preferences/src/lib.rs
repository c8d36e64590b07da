//! # Preferences Crate
//!
//! Per-user browser state: watchlist, watched movies, star ratings and
//! recently-viewed history.
//!
//! ## Components
//!
//! - **types**: [`UserPreferences`] and its persisted JSON layout
//! - **storage**: the [`StorageBackend`] trait plus in-memory and file backends
//! - **store**: [`PreferenceStore`], the only writer of the preferences
//!
//! ## Example Usage
//!
//! ```ignore
//! use preferences::{FileStorage, PreferenceStore};
//!
//! let mut store = PreferenceStore::load(FileStorage::new(".reel"));
//! store.add_to_watchlist(42);
//! store.rate_movie(42, 4.0)?;
//! assert!(store.is_in_watchlist(42));
//! ```

pub mod error;
pub mod types;
pub mod storage;
pub mod store;

pub use error::{PreferencesError, Result};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use store::{ChangeListener, PreferenceStore, STORAGE_KEY};
pub use types::{MAX_RECENTLY_VIEWED, MAX_STARS, MIN_STARS, UserPreferences, UserRating};

//! Session crate for the movie browser.
//!
//! A [`BrowserSession`] ties the static catalog to one user's preference
//! store and computes every derived view the browser shows: the home page
//! rows, the user's lists, search results and the movie details page.

pub mod error;
pub mod session;

pub use error::{Result, SessionError};
pub use session::{BrowserSession, HomeView, MovieDetails, RECENTLY_VIEWED_DISPLAY_LIMIT};

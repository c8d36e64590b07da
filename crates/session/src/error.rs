use catalog::MovieId;
use preferences::PreferencesError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Movie {0} is not in the catalog")]
    MovieNotFound(MovieId),

    #[error(transparent)]
    Preferences(#[from] PreferencesError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

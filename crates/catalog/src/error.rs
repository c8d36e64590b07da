//! Error types for the catalog crate.
//!
//! Loading a catalog can fail for three reasons: the file can't be read,
//! the JSON is malformed, or a record breaks one of the catalog's rules
//! (duplicate ids, ratings outside 0-10, movies with no genres).

use crate::types::MovieId;
use thiserror::Error;

/// Errors that can occur while loading and validating a movie catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the catalog
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog JSON couldn't be parsed
    #[error("Malformed catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A genre tag that isn't part of the known set
    #[error("Unknown genre: {0}")]
    UnknownGenre(String),

    /// A movie field had an invalid value
    #[error("Invalid value for {field} on movie {id}: {value}")]
    InvalidValue {
        id: MovieId,
        field: String,
        value: String,
    },

    /// Two records share the same movie id
    #[error("Duplicate movie id {0}")]
    DuplicateId(MovieId),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;

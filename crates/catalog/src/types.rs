//! Core domain types for the movie catalog.
//!
//! A catalog is a fixed list of [`Movie`] records loaded once at startup.
//! Nothing in here is mutated after loading: the browse, recommendation
//! and session layers only ever borrow movies from a [`Catalog`].

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie in the catalog
pub type MovieId = u32;

// =============================================================================
// Movie-related Types
// =============================================================================

/// A single film in the catalog.
///
/// Field names follow the camelCase JSON layout of catalog files
/// (`releaseDate`, `boxOffice`, `trailerUrl`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: u16,
    /// Critic rating on a 0-10 scale
    pub rating: f32,
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub poster: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop: Option<String>,
    #[serde(default)]
    pub plot: String,
    /// Short blurb shown on cards; falls back to `plot` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub director: String,
    /// Billing order is preserved
    #[serde(default)]
    pub cast: Vec<String>,
    /// Runtime in minutes
    #[serde(default)]
    pub runtime: u32,
    #[serde(default)]
    pub release_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_office: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
}

impl Movie {
    /// Minimal constructor, mostly useful in tests and examples.
    ///
    /// Every optional or presentational field is left empty.
    pub fn new(id: MovieId, title: impl Into<String>, year: u16, rating: f32, genres: Vec<Genre>) -> Self {
        Self {
            id,
            title: title.into(),
            year,
            rating,
            genres,
            poster: String::new(),
            backdrop: None,
            plot: String::new(),
            description: None,
            director: String::new(),
            cast: Vec::new(),
            runtime: 0,
            release_date: String::new(),
            trailer_url: None,
            box_office: None,
            imdb_id: None,
        }
    }

    /// Set the director (builder style)
    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = director.into();
        self
    }

    /// Set the cast list (builder style)
    pub fn with_cast<I, S>(mut self, cast: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cast = cast.into_iter().map(Into::into).collect();
        self
    }

    /// Set the plot (builder style)
    pub fn with_plot(mut self, plot: impl Into<String>) -> Self {
        self.plot = plot.into();
        self
    }

    /// Whether this movie is tagged with `genre`
    pub fn has_genre(&self, genre: Genre) -> bool {
        self.genres.contains(&genre)
    }

    /// Text shown on cards: the short description if there is one, else the plot
    pub fn summary(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.plot)
    }
}

/// Genre tags used by the catalog.
///
/// Serialized as their display strings ("Sci-Fi", "Film-Noir"), which is
/// how catalog files spell them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Biography,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    FilmNoir,
    History,
    Horror,
    Music,
    Musical,
    Mystery,
    Romance,
    SciFi,
    Sport,
    Thriller,
    War,
    Western,
}

impl Genre {
    /// Every genre, in display order
    pub const ALL: [Genre; 22] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Biography,
        Genre::Comedy,
        Genre::Crime,
        Genre::Documentary,
        Genre::Drama,
        Genre::Family,
        Genre::Fantasy,
        Genre::FilmNoir,
        Genre::History,
        Genre::Horror,
        Genre::Music,
        Genre::Musical,
        Genre::Mystery,
        Genre::Romance,
        Genre::SciFi,
        Genre::Sport,
        Genre::Thriller,
        Genre::War,
        Genre::Western,
    ];

    /// The tag as it appears in catalog files
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Biography => "Biography",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Documentary => "Documentary",
            Genre::Drama => "Drama",
            Genre::Family => "Family",
            Genre::Fantasy => "Fantasy",
            Genre::FilmNoir => "Film-Noir",
            Genre::History => "History",
            Genre::Horror => "Horror",
            Genre::Music => "Music",
            Genre::Musical => "Musical",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Sport => "Sport",
            Genre::Thriller => "Thriller",
            Genre::War => "War",
            Genre::Western => "Western",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; accepts "scifi" and "sci fi" as well as "Sci-Fi".
impl FromStr for Genre {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | ' ' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        Genre::ALL
            .iter()
            .copied()
            .find(|genre| {
                genre
                    .as_str()
                    .chars()
                    .filter(|c| *c != '-')
                    .flat_map(char::to_lowercase)
                    .eq(normalized.chars())
            })
            .ok_or_else(|| CatalogError::UnknownGenre(s.to_string()))
    }
}

impl TryFrom<String> for Genre {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Genre> for String {
    fn from(genre: Genre) -> Self {
        genre.as_str().to_string()
    }
}

// =============================================================================
// Catalog - The In-Memory Movie Table
// =============================================================================

/// Holds every movie plus the lookup indices built at load time.
///
/// Movies are kept in load order; `id_index` maps ids to positions in
/// that vector, so lookups are O(1) and iteration order is stable.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) movies: Vec<Movie>,
    pub(crate) id_index: HashMap<MovieId, usize>,
    /// Movies grouped by genre (one movie can appear in several lists)
    pub(crate) genre_index: HashMap<Genre, Vec<MovieId>>,
    /// Movies grouped by release year, sorted by year
    pub(crate) year_index: BTreeMap<u16, Vec<MovieId>>,
}

impl Catalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            id_index: HashMap::new(),
            genre_index: HashMap::new(),
            year_index: BTreeMap::new(),
        }
    }

    /// All movies in load order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Get a movie by id
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.id_index.get(&id).map(|&pos| &self.movies[pos])
    }

    /// Resolve a list of ids, keeping their order and skipping unknown ids
    pub fn get_movies(&self, ids: &[MovieId]) -> Vec<&Movie> {
        ids.iter().filter_map(|&id| self.get_movie(id)).collect()
    }

    /// Ids of all movies tagged with `genre`
    pub fn get_movies_by_genre(&self, genre: Genre) -> &[MovieId] {
        self.genre_index
            .get(&genre)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Ids of all movies released in `year`
    pub fn get_movies_by_year(&self, year: u16) -> &[MovieId] {
        self.year_index
            .get(&year)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

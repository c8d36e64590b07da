//! Filter state, sorting, and the browse entry point.
//!
//! A browse request is (search query, [`FilterState`], [`SortBy`]). It is
//! turned into a [`FilterPipeline`] and the survivors are sorted.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreFilter, RatingRangeFilter, SearchFilter, YearRangeFilter};
use catalog::{Genre, MAX_MOVIE_RATING, Movie};
use chrono::{Datelike, Utc};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Lower bound of the default year range
pub const MIN_FILTER_YEAR: u16 = 1980;

fn this_year() -> u16 {
    u16::try_from(Utc::now().year()).unwrap_or(u16::MAX)
}

/// The advanced-filter panel: genres, year range, rating range.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Keep movies in ANY of these genres; empty keeps all
    pub genres: Vec<Genre>,
    /// Inclusive `(from, to)` release years
    pub year_range: (u16, u16),
    /// Inclusive `(min, max)` critic ratings
    pub rating_range: (f32, f32),
}

impl FilterState {
    /// Default filters with the year range ending at `current_year`
    pub fn new(current_year: u16) -> Self {
        Self {
            genres: Vec::new(),
            year_range: (MIN_FILTER_YEAR, current_year),
            rating_range: (0.0, MAX_MOVIE_RATING),
        }
    }

    /// Select `genre` if it isn't selected, deselect it otherwise
    pub fn toggle_genre(&mut self, genre: Genre) {
        if let Some(pos) = self.genres.iter().position(|&g| g == genre) {
            self.genres.remove(pos);
        } else {
            self.genres.push(genre);
        }
    }

    /// Select `genre`; selecting it again changes nothing
    pub fn select_genre(&mut self, genre: Genre) {
        if !self.genres.contains(&genre) {
            self.genres.push(genre);
        }
    }

    /// Back to the defaults, keeping the current upper year bound
    pub fn reset(&mut self) {
        *self = Self::new(this_year());
    }

    /// Whether anything differs from the defaults for `current_year`
    pub fn is_active_at(&self, current_year: u16) -> bool {
        *self != Self::new(current_year)
    }

    pub fn is_active(&self) -> bool {
        self.is_active_at(this_year())
    }

    /// Build the filter pipeline for this state plus a search query
    pub fn pipeline(&self, query: &str) -> FilterPipeline {
        FilterPipeline::new()
            .add_filter(SearchFilter::new(query))
            .add_filter(GenreFilter::new(self.genres.iter().copied()))
            .add_filter(YearRangeFilter::new(self.year_range.0, self.year_range.1))
            .add_filter(RatingRangeFilter::new(self.rating_range.0, self.rating_range.1))
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(this_year())
    }
}

/// Ordering for browse results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Highest critic rating first
    #[default]
    Rating,
    /// Newest first
    Year,
}

impl SortBy {
    fn compare(&self, a: &Movie, b: &Movie) -> Ordering {
        match self {
            SortBy::Rating => b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal),
            SortBy::Year => b.year.cmp(&a.year),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Rating => f.write_str("rating"),
            SortBy::Year => f.write_str("year"),
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rating" => Ok(SortBy::Rating),
            "year" => Ok(SortBy::Year),
            other => Err(format!("unknown sort order '{other}' (expected rating or year)")),
        }
    }
}

/// Stable in-place sort; equal keys keep catalog order
pub fn sort_movies(movies: &mut [&Movie], sort: SortBy) {
    movies.sort_by(|a, b| sort.compare(a, b));
}

/// Search, filter and sort `movies`
pub fn browse<'a>(movies: &'a [Movie], query: &str, filters: &FilterState, sort: SortBy) -> Vec<&'a Movie> {
    let mut kept = filters.pipeline(query).apply(movies.iter().collect());
    sort_movies(&mut kept, sort);
    debug!("Browse '{}' by {}: {} of {} movies", query, sort, kept.len(), movies.len());
    kept
}

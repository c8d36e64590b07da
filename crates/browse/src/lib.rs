//! Search, filtering, sorting and paging for the catalog view.
//!
//! This crate provides:
//! - Filter trait and implementations (search, genre, year, rating, ids)
//! - FilterPipeline for composing filters
//! - FilterState / SortBy / browse for the main movie grid
//! - InfiniteScroll for revealing results a page at a time
//!
//! ## Architecture
//! A browse request is processed in stages:
//! 1. FilterState + search query become a FilterPipeline
//! 2. The pipeline narrows the catalog down, preserving catalog order
//! 3. Results are sorted (stable) by rating or year
//! 4. InfiniteScroll decides how many are visible
//!
//! ## Example Usage
//! ```ignore
//! use browse::{browse, FilterState, InfiniteScroll, SortBy};
//!
//! let mut filters = FilterState::default();
//! filters.toggle_genre(Genre::SciFi);
//!
//! let results = browse(catalog.movies(), "nolan", &filters, SortBy::Rating);
//! let mut scroll = InfiniteScroll::new(results.len());
//! let first_page = scroll.visible(&results);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod view;
pub mod scroll;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use scroll::{DEFAULT_LOAD_DELAY, DEFAULT_PAGE_SIZE, InfiniteScroll};
pub use view::{FilterState, MIN_FILTER_YEAR, SortBy, browse, sort_movies};

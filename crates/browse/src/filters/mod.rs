//! Filter implementations for the browse pipeline.
//!
//! This module contains all the concrete filters that can be composed
//! into a FilterPipeline.

pub mod exclude_ids;
pub mod genre;
pub mod minimum_rating;
pub mod rating_range;
pub mod search;
pub mod year_range;

// Re-export for convenience
pub use exclude_ids::ExcludeIdsFilter;
pub use genre::GenreFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use rating_range::RatingRangeFilter;
pub use search::SearchFilter;
pub use year_range::YearRangeFilter;

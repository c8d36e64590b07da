//! # Recommend Crate
//!
//! The recommendation heuristics behind the browser's "more like this",
//! "recommended for you", "trending" and "surprise me" rows.
//!
//! Everything here is a pure function over a caller-supplied slice of
//! movies; results borrow from that slice.
//!
//! ## Components
//!
//! - **similarity**: pairwise genre/rating/year similarity
//! - **similar**: rank a pool against a reference movie
//! - **personalized**: genre-affinity recommendations from watchlist and ratings
//! - **trending**: recency + rating ordering
//! - **random**: uniform pick from the eligible movies
//! - **lookup**: movies by director or cast member
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommend::{get_similar_movies, get_trending_movies, RecommendationOptions};
//!
//! let movies = catalog.movies();
//! let similar = get_similar_movies(&movies[0], movies, &RecommendationOptions::new(6));
//! let trending = get_trending_movies(movies, 10);
//! ```

pub mod types;
pub mod similarity;
pub mod similar;
pub mod personalized;
pub mod trending;
pub mod random;
pub mod lookup;

pub use lookup::{get_movies_by_cast, get_movies_by_director};
pub use personalized::{get_personalized_recommendations, rank_personalized, recommend_for};
pub use random::{get_random_movie, pick_random_movie};
pub use similar::{get_similar_movies, rank_similar};
pub use similarity::similarity;
pub use trending::{get_trending_movies, get_trending_movies_at, rank_trending_at};
pub use types::{
    DEFAULT_PERSONALIZED_LIMIT, DEFAULT_RANDOM_MIN_RATING, DEFAULT_SIMILAR_LIMIT,
    DEFAULT_TRENDING_LIMIT, RecommendationOptions, ScoredMovie,
};

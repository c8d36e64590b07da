//! "More like this": rank a pool against a reference movie.

use crate::similarity::similarity;
use crate::types::{RecommendationOptions, ScoredMovie, movies_of, rank};
use catalog::Movie;
use tracing::{debug, instrument};

/// Score every pool movie against `reference`, best first.
///
/// The reference itself and excluded ids never appear in the result.
#[instrument(skip_all, fields(reference = reference.id, limit = options.limit))]
pub fn rank_similar<'a>(
    reference: &Movie,
    pool: &'a [Movie],
    options: &RecommendationOptions,
) -> Vec<ScoredMovie<'a>> {
    let scored: Vec<ScoredMovie<'a>> = pool
        .iter()
        .filter(|movie| movie.id != reference.id && !options.is_excluded(movie.id))
        .map(|movie| ScoredMovie::new(movie, similarity(reference, movie)))
        .collect();

    debug!("Scored {} candidates", scored.len());
    rank(scored, options.limit)
}

/// The `options.limit` movies most similar to `reference`
pub fn get_similar_movies<'a>(
    reference: &Movie,
    pool: &'a [Movie],
    options: &RecommendationOptions,
) -> Vec<&'a Movie> {
    movies_of(rank_similar(reference, pool, options))
}

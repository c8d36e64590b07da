//! "Surprise me": a uniformly random pick from the eligible movies.

use catalog::{Movie, MovieId};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Movies with `rating >= min_rating` that aren't excluded
pub fn eligible_movies<'a>(pool: &'a [Movie], min_rating: f32, exclude_ids: &[MovieId]) -> Vec<&'a Movie> {
    pool.iter()
        .filter(|movie| movie.rating >= min_rating && !exclude_ids.contains(&movie.id))
        .collect()
}

/// Pick with a caller-supplied RNG (seed it for reproducible picks)
pub fn pick_random_movie<'a, R: Rng + ?Sized>(
    rng: &mut R,
    pool: &'a [Movie],
    min_rating: f32,
    exclude_ids: &[MovieId],
) -> Option<&'a Movie> {
    let eligible = eligible_movies(pool, min_rating, exclude_ids);
    debug!("{} movies eligible for a random pick", eligible.len());
    eligible.choose(rng).copied()
}

/// Pick using the thread-local RNG; `None` when nothing is eligible
pub fn get_random_movie<'a>(pool: &'a [Movie], min_rating: f32, exclude_ids: &[MovieId]) -> Option<&'a Movie> {
    pick_random_movie(&mut rand::rng(), pool, min_rating, exclude_ids)
}

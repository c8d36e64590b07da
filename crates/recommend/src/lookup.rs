//! Credit lookups: other movies by the same director or cast member.

use catalog::{Movie, MovieId};

/// Movies whose director matches `director` exactly, ignoring case
pub fn get_movies_by_director<'a>(director: &str, pool: &'a [Movie], exclude_id: Option<MovieId>) -> Vec<&'a Movie> {
    let director = director.to_lowercase();
    pool.iter()
        .filter(|movie| movie.director.to_lowercase() == director && Some(movie.id) != exclude_id)
        .collect()
}

/// Movies where any cast member's name contains `cast_member`, ignoring case
pub fn get_movies_by_cast<'a>(cast_member: &str, pool: &'a [Movie], exclude_id: Option<MovieId>) -> Vec<&'a Movie> {
    let needle = cast_member.to_lowercase();
    pool.iter()
        .filter(|movie| {
            Some(movie.id) != exclude_id
                && movie
                    .cast
                    .iter()
                    .any(|actor| actor.to_lowercase().contains(&needle))
        })
        .collect()
}

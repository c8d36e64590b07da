//! Personalized recommendations from the watchlist and star ratings.
//!
//! ## Algorithm
//! 1. Favorites = movies in the watchlist OR rated 4+ stars
//! 2. No favorites: fall back to the highest rated movies
//! 3. Build a genre affinity map: each favorite adds `stars / 5` to each
//!    of its genres (1.0 when it is on the watchlist but unrated)
//! 4. Score every other movie: sum of its genres' affinity,
//!    times `rating / 10`
//! 5. Highest scores first

use crate::types::{RecommendationOptions, ScoredMovie, movies_of, rank};
use catalog::{Genre, MAX_MOVIE_RATING, Movie, MovieId};
use preferences::{MAX_STARS, UserPreferences, UserRating};
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

/// Star rating at or above which a rated movie counts as a favorite
pub const FAVORITE_MIN_STARS: f32 = 4.0;

fn user_rating(ratings: &[UserRating], movie_id: MovieId) -> Option<f32> {
    ratings
        .iter()
        .find(|r| r.movie_id == movie_id)
        .map(|r| r.rating)
}

/// Movies the user has signalled they like, in pool order
pub fn favorites<'a>(
    pool: &'a [Movie],
    watchlist: &[MovieId],
    ratings: &[UserRating],
) -> Vec<&'a Movie> {
    pool.iter()
        .filter(|movie| {
            watchlist.contains(&movie.id)
                || user_rating(ratings, movie.id).is_some_and(|stars| stars >= FAVORITE_MIN_STARS)
        })
        .collect()
}

/// Per-genre weight accumulated over the favorites
pub fn genre_affinity(favorites: &[&Movie], ratings: &[UserRating]) -> HashMap<Genre, f32> {
    let mut affinity: HashMap<Genre, f32> = HashMap::new();
    for movie in favorites {
        let weight = user_rating(ratings, movie.id)
            .map(|stars| stars / MAX_STARS)
            .unwrap_or(1.0);

        for &genre in &movie.genres {
            *affinity.entry(genre).or_insert(0.0) += weight;
        }
    }
    affinity
}

/// Scored personalized recommendations, best first
#[instrument(skip_all, fields(watchlist = watchlist.len(), ratings = ratings.len(), limit = options.limit))]
pub fn rank_personalized<'a>(
    pool: &'a [Movie],
    watchlist: &[MovieId],
    ratings: &[UserRating],
    options: &RecommendationOptions,
) -> Vec<ScoredMovie<'a>> {
    let favorites = favorites(pool, watchlist, ratings);

    if favorites.is_empty() {
        debug!("No favorites, falling back to top rated");
        let top_rated: Vec<ScoredMovie<'a>> = pool
            .iter()
            .filter(|movie| !options.is_excluded(movie.id))
            .map(|movie| ScoredMovie::new(movie, movie.rating))
            .collect();
        return rank(top_rated, options.limit);
    }

    let affinity = genre_affinity(&favorites, ratings);
    let favorite_ids: HashSet<MovieId> = favorites.iter().map(|m| m.id).collect();
    debug!(
        "{} favorites spanning {} genres",
        favorite_ids.len(),
        affinity.len()
    );

    let scored: Vec<ScoredMovie<'a>> = pool
        .iter()
        .filter(|movie| !options.is_excluded(movie.id) && !favorite_ids.contains(&movie.id))
        .map(|movie| {
            let genre_score: f32 = movie
                .genres
                .iter()
                .map(|genre| affinity.get(genre).copied().unwrap_or(0.0))
                .sum();
            ScoredMovie::new(movie, genre_score * (movie.rating / MAX_MOVIE_RATING))
        })
        .collect();

    rank(scored, options.limit)
}

/// Personalized recommendations for a watchlist and set of ratings
pub fn get_personalized_recommendations<'a>(
    pool: &'a [Movie],
    watchlist: &[MovieId],
    ratings: &[UserRating],
    options: &RecommendationOptions,
) -> Vec<&'a Movie> {
    movies_of(rank_personalized(pool, watchlist, ratings, options))
}

/// Same as [`get_personalized_recommendations`], reading the watchlist and
/// ratings from a preferences snapshot
pub fn recommend_for<'a>(
    pool: &'a [Movie],
    preferences: &UserPreferences,
    options: &RecommendationOptions,
) -> Vec<&'a Movie> {
    get_personalized_recommendations(pool, &preferences.watchlist, &preferences.ratings, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Movie> {
        vec![
            Movie::new(1, "The Shawshank Redemption", 1994, 9.3, vec![Genre::Drama]),
            Movie::new(2, "The Godfather", 1972, 9.2, vec![Genre::Crime, Genre::Drama]),
            Movie::new(3, "The Dark Knight", 2008, 9.0, vec![Genre::Action, Genre::Crime, Genre::Drama]),
            Movie::new(4, "Inception", 2010, 8.8, vec![Genre::Action, Genre::Adventure, Genre::SciFi]),
            Movie::new(5, "Interstellar", 2014, 8.7, vec![Genre::Adventure, Genre::Drama, Genre::SciFi]),
            Movie::new(6, "Toy Story", 1995, 8.3, vec![Genre::Animation, Genre::Comedy, Genre::Family]),
        ]
    }

    fn ids(movies: &[&Movie]) -> Vec<MovieId> {
        movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_no_favorites_falls_back_to_top_rated() {
        let mut pool = pool();
        pool.reverse();

        // A low rating doesn't make a favorite
        let ratings = vec![UserRating::new(6, 2.0)];
        let recs = get_personalized_recommendations(&pool, &[], &ratings, &RecommendationOptions::new(3));
        assert_eq!(ids(&recs), vec![1, 2, 3]);
    }

    #[test]
    fn test_fallback_respects_exclusions() {
        let pool = pool();
        let options = RecommendationOptions::new(2).with_excluded([1]);
        let recs = get_personalized_recommendations(&pool, &[], &[], &options);
        assert_eq!(ids(&recs), vec![2, 3]);
    }

    #[test]
    fn test_favorites_from_watchlist_and_high_ratings() {
        let pool = pool();
        let ratings = vec![UserRating::new(2, 4.0), UserRating::new(3, 3.5)];
        let favs = favorites(&pool, &[4], &ratings);
        assert_eq!(ids(&favs), vec![2, 4]);
    }

    #[test]
    fn test_genre_affinity_weights() {
        let pool = pool();
        let ratings = vec![UserRating::new(2, 4.0)];
        let favs = favorites(&pool, &[4], &ratings);
        let affinity = genre_affinity(&favs, &ratings);

        // Godfather rated 4 stars -> 0.8 per genre; Inception unrated -> 1.0
        assert!((affinity[&Genre::Crime] - 0.8).abs() < 1e-6);
        assert!((affinity[&Genre::Drama] - 0.8).abs() < 1e-6);
        assert!((affinity[&Genre::Action] - 1.0).abs() < 1e-6);
        assert!(!affinity.contains_key(&Genre::Comedy));
    }

    #[test]
    fn test_recommendations_follow_affinity() {
        let pool = pool();
        // Sci-fi fan: Inception on the watchlist
        let recs = get_personalized_recommendations(&pool, &[4], &[], &RecommendationOptions::new(6));

        // Interstellar shares Adventure + Sci-Fi -> 2.0 * 0.87
        // The Dark Knight shares Action -> 1.0 * 0.90
        assert_eq!(ids(&recs)[..2], [5, 3]);
        assert!(!recs.iter().any(|m| m.id == 4));
    }

    #[test]
    fn test_favorites_and_exclusions_are_skipped() {
        let pool = pool();
        let ratings = vec![UserRating::new(1, 5.0)];
        let options = RecommendationOptions::new(10).with_excluded([2]);
        let recs = get_personalized_recommendations(&pool, &[], &ratings, &options);

        assert!(!recs.iter().any(|m| m.id == 1 || m.id == 2));
        assert_eq!(recs.len(), pool.len() - 2);
    }

    #[test]
    fn test_recommend_for_preferences() {
        let pool = pool();
        let prefs = UserPreferences {
            watchlist: vec![6],
            ..UserPreferences::default()
        };
        let recs = recommend_for(&pool, &prefs, &RecommendationOptions::new(1));
        assert_eq!(recs.len(), 1);
        assert_ne!(recs[0].id, 6);
    }
}

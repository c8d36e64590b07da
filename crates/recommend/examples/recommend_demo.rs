//! Example: recommendation rows for a catalog file
//!
//! Run with: cargo run --package recommend --example recommend_demo -- data/movies.json
//!
//! This example shows how to:
//! 1. Load a catalog
//! 2. Find movies similar to the featured movie
//! 3. Rank trending movies
//! 4. Build personalized recommendations from a pretend watchlist

use catalog::Catalog;
use preferences::UserRating;
use recommend::{rank_personalized, rank_similar, rank_trending_at, RecommendationOptions};
use std::path::PathBuf;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/movies.json"));
    let catalog = Catalog::load_from_file(&path)?;
    let movies = catalog.movies();

    let Some(featured) = catalog.featured() else {
        println!("Catalog is empty");
        return Ok(());
    };
    println!("=== Featured: {} ({}) ===\n", featured.title, featured.year);

    let start = Instant::now();
    let similar = rank_similar(featured, movies, &RecommendationOptions::new(5));
    println!("More like this ({:?}):", start.elapsed());
    for (i, scored) in similar.iter().enumerate() {
        println!("  {}. {} (Score: {:.3})", i + 1, scored.movie.title, scored.score);
    }

    let start = Instant::now();
    let trending = rank_trending_at(movies, 5, recommend::trending::current_year());
    println!("\nTrending ({:?}):", start.elapsed());
    for (i, scored) in trending.iter().enumerate() {
        println!("  {}. {} [{}] (Score: {:.3})", i + 1, scored.movie.title, scored.movie.year, scored.score);
    }

    // Pretend the user loved the featured movie
    let ratings = vec![UserRating::new(featured.id, 5.0)];
    let start = Instant::now();
    let personalized = rank_personalized(movies, &[], &ratings, &RecommendationOptions::new(5));
    println!("\nBecause you liked {} ({:?}):", featured.title, start.elapsed());
    for (i, scored) in personalized.iter().enumerate() {
        println!("  {}. {} (Score: {:.3})", i + 1, scored.movie.title, scored.score);
    }

    Ok(())
}

//! Example: load a catalog file and print a summary
//!
//! Run with: cargo run --package catalog --example catalog_stats -- data/movies.json

use catalog::Catalog;
use std::path::PathBuf;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/movies.json"));

    let start = Instant::now();
    let catalog = Catalog::load_from_file(&path)?;
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", catalog.len());

    if let Some((first, last)) = catalog.year_bounds() {
        println!("Years: {} - {}", first, last);
    }
    if let Some(featured) = catalog.featured() {
        println!("Featured: {} ({}) {:.1}", featured.title, featured.year, featured.rating);
    }

    println!("\nGenres:");
    for genre in catalog.all_genres() {
        println!("  {:<12} {}", genre, catalog.get_movies_by_genre(genre).len());
    }
    Ok(())
}

mod config;

use anyhow::{Context, Result, anyhow};
use browse::{FilterState, InfiniteScroll, SortBy};
use catalog::{Catalog, Genre, MAX_MOVIE_RATING, Movie, MovieId};
use clap::{Parser, Subcommand};
use colored::Colorize;
use config::AppConfig;
use preferences::FileStorage;
use recommend::{
    DEFAULT_PERSONALIZED_LIMIT, DEFAULT_RANDOM_MIN_RATING, DEFAULT_SIMILAR_LIMIT,
    DEFAULT_TRENDING_LIMIT, RecommendationOptions,
};
use session::{BrowserSession, MovieDetails};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

type Session = BrowserSession<FileStorage>;

/// Reel Browse - terminal movie browser
#[derive(Parser)]
#[command(name = "reel-browse")]
#[command(about = "Browse a movie catalog, keep a watchlist and get recommendations", long_about = None)]
struct Cli {
    /// Movie catalog JSON file [env: REEL_CATALOG_PATH]
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Directory holding the saved preferences [env: REEL_DATA_DIR]
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and filter the catalog
    Browse {
        /// Matches title, plot, director or cast (case-insensitive)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Keep movies in any of these genres (repeatable)
        #[arg(short, long)]
        genre: Vec<Genre>,

        /// Earliest release year
        #[arg(long)]
        from_year: Option<u16>,

        /// Latest release year
        #[arg(long)]
        to_year: Option<u16>,

        /// Minimum critic rating
        #[arg(long)]
        min_rating: Option<f32>,

        /// Maximum critic rating
        #[arg(long)]
        max_rating: Option<f32>,

        /// Sort order: rating or year
        #[arg(short, long, default_value_t = SortBy::Rating)]
        sort: SortBy,

        /// How many pages of results to reveal
        #[arg(short, long, default_value = "1")]
        pages: usize,

        /// Results per page [env: REEL_PAGE_SIZE]
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Show a movie's details page
    Show { id: MovieId },

    /// Movies similar to the given one
    Similar {
        id: MovieId,

        #[arg(long, default_value_t = DEFAULT_SIMILAR_LIMIT)]
        limit: usize,
    },

    /// Personalized recommendations from your watchlist and ratings
    Recommend {
        #[arg(long, default_value_t = DEFAULT_PERSONALIZED_LIMIT)]
        limit: usize,
    },

    /// Recent, well-rated movies
    Trending {
        #[arg(long, default_value_t = DEFAULT_TRENDING_LIMIT)]
        limit: usize,
    },

    /// Pick a random movie you haven't watched
    Random {
        #[arg(long, default_value_t = DEFAULT_RANDOM_MIN_RATING)]
        min_rating: f32,
    },

    /// Movies by a director (exact name, any case)
    Director { name: String },

    /// Movies featuring a cast member (partial name, any case)
    Cast { name: String },

    /// Manage your watchlist
    Watchlist {
        #[command(subcommand)]
        action: ListAction,
    },

    /// Manage your watched movies
    Watched {
        #[command(subcommand)]
        action: ListAction,
    },

    /// Rate a movie from 1 to 5 stars
    Rate { id: MovieId, stars: f32 },

    /// Recently viewed movies
    History,

    /// Forget the watchlist, watched movies, ratings and history
    Reset,
}

#[derive(Subcommand, Clone, Copy)]
enum ListAction {
    Add { id: MovieId },
    Remove { id: MovieId },
    Toggle { id: MovieId },
    List,
}

impl ListAction {
    fn movie_id(self) -> Option<MovieId> {
        match self {
            ListAction::Add { id } | ListAction::Remove { id } | ListAction::Toggle { id } => Some(id),
            ListAction::List => None,
        }
    }
}

#[derive(Clone, Copy)]
enum UserList {
    Watchlist,
    Watched,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(catalog) = cli.catalog {
        config.catalog_path = catalog;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_file(&config.catalog_path)
            .with_context(|| format!("Failed to load catalog {}", config.catalog_path.display()))?,
    );
    info!("Loaded {} movies in {:?}", catalog.len(), start.elapsed());

    let mut session = BrowserSession::open(catalog, FileStorage::new(&config.data_dir));

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Browse {
            query,
            genre,
            from_year,
            to_year,
            min_rating,
            max_rating,
            sort,
            pages,
            page_size,
        } => {
            let mut filters = FilterState::default();
            for genre in genre {
                filters.select_genre(genre);
            }
            filters.year_range = (
                from_year.unwrap_or(filters.year_range.0),
                to_year.unwrap_or(filters.year_range.1),
            );
            filters.rating_range = (
                min_rating.unwrap_or(0.0),
                max_rating.unwrap_or(MAX_MOVIE_RATING),
            );
            if let Some(page_size) = page_size {
                config.page_size = page_size;
            }
            handle_browse(&session, &config, &query, &filters, sort, pages).await
        }
        Commands::Show { id } => handle_show(&mut session, id),
        Commands::Similar { id, limit } => handle_similar(&session, id, limit),
        Commands::Recommend { limit } => {
            let movies = recommend::recommend_for(
                session.catalog().movies(),
                session.store().preferences(),
                &RecommendationOptions::new(limit),
            );
            print_movies("Recommended for you", &movies);
            Ok(())
        }
        Commands::Trending { limit } => {
            let movies = recommend::get_trending_movies(session.catalog().movies(), limit);
            print_movies("Trending now", &movies);
            Ok(())
        }
        Commands::Random { min_rating } => handle_random(&session, min_rating),
        Commands::Director { name } => {
            let movies = recommend::get_movies_by_director(&name, session.catalog().movies(), None);
            print_movies(&format!("Directed by {}", name), &movies);
            Ok(())
        }
        Commands::Cast { name } => {
            let movies = recommend::get_movies_by_cast(&name, session.catalog().movies(), None);
            print_movies(&format!("Featuring {}", name), &movies);
            Ok(())
        }
        Commands::Watchlist { action } => handle_list(&mut session, UserList::Watchlist, action),
        Commands::Watched { action } => handle_list(&mut session, UserList::Watched, action),
        Commands::Rate { id, stars } => {
            session.rate(id, stars)?;
            println!("{} Rated {} {}", "✓".green(), title_of(&session, id)?, stars_of(stars));
            Ok(())
        }
        Commands::History => {
            print_movies("Recently viewed", &session.recently_viewed_movies());
            Ok(())
        }
        Commands::Reset => {
            session.store_mut().reset();
            println!("{} Cleared all saved preferences", "✓".green());
            Ok(())
        }
    }
}

/// Handle the 'browse' command
async fn handle_browse(
    session: &Session,
    config: &AppConfig,
    query: &str,
    filters: &FilterState,
    sort: SortBy,
    pages: usize,
) -> Result<()> {
    let results = session.browse(query, filters, sort);
    let mut scroll = InfiniteScroll::with_page_size(results.len(), config.page_size);

    // The first page is already visible
    for _ in 1..pages.max(1) {
        if !scroll.load_more_after(config.load_delay()).await {
            break;
        }
    }

    let header = format!(
        "Showing {} of {} movies (sorted by {})",
        scroll.display_count(),
        scroll.total(),
        sort
    );
    print_movies(&header, scroll.visible(&results));

    if scroll.has_more() {
        println!("{}", "  ... use --pages to see more".dimmed());
    }
    if filters.is_active() {
        println!("{}", "  (advanced filters active)".dimmed());
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(session: &mut Session, id: MovieId) -> Result<()> {
    let details = session.open_movie(id)?;
    print_details(&details);
    Ok(())
}

/// Handle the 'similar' command
fn handle_similar(session: &Session, id: MovieId, limit: usize) -> Result<()> {
    let movie = session
        .catalog()
        .get_movie(id)
        .ok_or_else(|| anyhow!("Movie {} not found", id))?;
    let similar = recommend::get_similar_movies(
        movie,
        session.catalog().movies(),
        &RecommendationOptions::new(limit),
    );
    print_movies(&format!("More like {}", movie.title), &similar);
    Ok(())
}

/// Handle the 'random' command
fn handle_random(session: &Session, min_rating: f32) -> Result<()> {
    match session.surprise_me(min_rating) {
        Some(movie) => {
            println!("{}", "Surprise!".bold().magenta());
            print_movie_line(movie);
            println!("   {}", movie.summary());
        }
        None => println!(
            "{}",
            format!("No unwatched movies rated {:.1} or higher", min_rating).yellow()
        ),
    }
    Ok(())
}

/// Handle the 'watchlist' and 'watched' commands
fn handle_list(session: &mut Session, list: UserList, action: ListAction) -> Result<()> {
    let label = match list {
        UserList::Watchlist => "watchlist",
        UserList::Watched => "watched",
    };

    if let ListAction::List = action {
        let movies = match list {
            UserList::Watchlist => session.watchlist_movies(),
            UserList::Watched => session.watched_movies(),
        };
        let header = match list {
            UserList::Watchlist => "Your watchlist",
            UserList::Watched => "Watched",
        };
        print_movies(header, &movies);
        return Ok(());
    }

    let Some(id) = action.movie_id() else {
        return Ok(());
    };
    let title = title_of(session, id)?;

    let member = match (list, action) {
        (UserList::Watchlist, ListAction::Toggle { .. }) => session.toggle_watchlist(id)?,
        (UserList::Watched, ListAction::Toggle { .. }) => session.toggle_watched(id)?,
        (UserList::Watchlist, ListAction::Add { .. }) => {
            session.store_mut().add_to_watchlist(id);
            true
        }
        (UserList::Watchlist, _) => {
            session.store_mut().remove_from_watchlist(id);
            false
        }
        (UserList::Watched, ListAction::Add { .. }) => {
            session.store_mut().mark_as_watched(id);
            true
        }
        (UserList::Watched, _) => {
            session.store_mut().mark_as_unwatched(id);
            false
        }
    };

    if member {
        println!("{} Added {} to {}", "✓".green(), title, label);
    } else {
        println!("{} Removed {} from {}", "✓".green(), title, label);
    }
    Ok(())
}

fn title_of(session: &Session, id: MovieId) -> Result<String> {
    session
        .catalog()
        .get_movie(id)
        .map(|movie| movie.title.clone())
        .ok_or_else(|| anyhow!("Movie {} not found", id))
}

fn genres_of(movie: &Movie) -> String {
    movie
        .genres
        .iter()
        .map(|g| g.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn stars_of(stars: f32) -> String {
    let filled = stars.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
        .yellow()
        .to_string()
}

fn print_movie_line(movie: &Movie) {
    println!(
        "{:>4}  {} ({}) [{}] {}",
        movie.id.to_string().dimmed(),
        movie.title.bold(),
        movie.year,
        genres_of(movie),
        format!("{:.1}", movie.rating).green()
    );
}

/// Print a titled list of movies, one per line
fn print_movies(header: &str, movies: &[&Movie]) {
    println!("{}", header.bold().blue());
    if movies.is_empty() {
        println!("{}", "  (nothing here yet)".dimmed());
        return;
    }
    for movie in movies {
        print_movie_line(movie);
    }
}

fn print_details(details: &MovieDetails) {
    let movie = &details.movie;
    println!("{}", format!("{} ({})", movie.title, movie.year).bold().blue());
    println!("{}Rating: {}", "• ".green(), format!("{:.1}/10", movie.rating).green());
    println!("{}Genres: {}", "• ".green(), genres_of(movie));
    if movie.runtime > 0 {
        println!("{}Runtime: {}h {}m", "• ".green(), movie.runtime / 60, movie.runtime % 60);
    }
    if !movie.director.is_empty() {
        println!("{}Director: {}", "• ".green(), movie.director);
    }
    if !movie.cast.is_empty() {
        println!("{}Cast: {}", "• ".green(), movie.cast.join(", "));
    }
    if let Some(box_office) = &movie.box_office {
        println!("{}Box office: {}", "• ".green(), box_office);
    }
    if let Some(trailer) = &movie.trailer_url {
        println!("{}Trailer: {}", "• ".green(), trailer);
    }
    println!();
    println!("{}", movie.summary());
    println!();

    let mut status = Vec::new();
    if details.in_watchlist {
        status.push("in watchlist".cyan().to_string());
    }
    if details.watched {
        status.push("watched".cyan().to_string());
    }
    if let Some(rating) = details.user_rating {
        status.push(format!("your rating {}", stars_of(rating)));
    }
    if !status.is_empty() {
        println!("{}", status.join(" · "));
        println!();
    }

    let similar: Vec<&Movie> = details.similar.iter().collect();
    print_movies("More like this", &similar);

    if !details.more_from_director.is_empty() {
        let more: Vec<&Movie> = details.more_from_director.iter().collect();
        println!();
        print_movies(&format!("More from {}", movie.director), &more);
    }
}

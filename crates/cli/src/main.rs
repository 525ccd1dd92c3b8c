mod config;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{ContentType, TitleId, TitleRecord};
use pipeline::ScoredTitle;
use rand::seq::IndexedRandom;
use service::{
    CatalogStore, QueryParams, RecommendationOutcome, RecommendationService, ServiceConfig,
};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::config::Config;

/// catalog-recs - content-based title recommendations and catalog statistics
#[derive(Parser)]
#[command(name = "catalog-recs")]
#[command(about = "Recommend titles from a streaming catalog export", long_about = None)]
struct Cli {
    /// Catalog export (.csv or .json); overrides CATALOG_PATH
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Maximum results per query; overrides CATALOG_MAX_LIMIT
    #[arg(long)]
    max_limit: Option<usize>,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend titles matching genre, director and/or country
    Recommend {
        /// Genre substring (case-insensitive)
        #[arg(long, default_value = "")]
        genre: String,

        /// Director substring (case-insensitive)
        #[arg(long, default_value = "")]
        director: String,

        /// Country substring (case-insensitive)
        #[arg(long, default_value = "")]
        country: String,

        /// Movie, "TV Show" or Both
        #[arg(long, default_value = "Both")]
        content_type: String,

        /// Number of recommendations to return
        #[arg(long, allow_hyphen_values = true)]
        limit: Option<i64>,

        /// Earliest release year
        #[arg(long, allow_hyphen_values = true)]
        min_year: Option<i64>,

        /// Show the score breakdown and description of each title
        #[arg(long)]
        explain: bool,
    },

    /// List the genre, director and country filter options
    Options {
        /// Also list every qualifying director
        #[arg(long)]
        directors: bool,
    },

    /// Show catalog statistics
    Stats,

    /// Look up titles by name, genre, director, year range or type
    Search {
        /// Title substring (case-insensitive)
        #[arg(long)]
        title: Option<String>,

        /// Genre substring (case-insensitive)
        #[arg(long)]
        genre: Option<String>,

        /// Director substring (case-insensitive)
        #[arg(long)]
        director: Option<String>,

        /// Earliest release year (inclusive)
        #[arg(long)]
        from: Option<u16>,

        /// Latest release year (inclusive)
        #[arg(long)]
        to: Option<u16>,

        /// Movie or "TV Show"
        #[arg(long)]
        content_type: Option<String>,

        /// Maximum number of titles to print
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Run concurrent random queries to measure latency
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
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
    let mut config = Config::from_env()?;
    if let Some(path) = cli.data {
        config.path = path;
    }
    if let Some(max_limit) = cli.max_limit {
        config.max_limit = max_limit;
    }
    debug!(?config, "Resolved configuration");

    let start = Instant::now();
    let store = Arc::new(
        CatalogStore::load_from_file(&config.path)
            .with_context(|| format!("Failed to load catalog from {}", config.path.display()))?,
    );
    if !cli.json {
        println!(
            "{} Loaded {} titles from {} in {:?}",
            "✓".green(),
            store.snapshot().catalog().len(),
            config.path.display(),
            start.elapsed()
        );
    }

    let service = RecommendationService::new(
        store,
        ServiceConfig::default().with_max_limit(config.max_limit),
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            genre,
            director,
            country,
            content_type,
            limit,
            min_year,
            explain,
        } => {
            let params = QueryParams::new(
                limit.unwrap_or(config.default_limit),
                min_year.unwrap_or(config.default_min_year),
            )
            .with_genre(genre)
            .with_director(director)
            .with_country(country)
            .with_content_type(content_type);
            handle_recommend(&service, &params, cli.json, explain)?
        }
        Commands::Options { directors } => handle_options(&service, cli.json, directors)?,
        Commands::Stats => handle_stats(&service, cli.json)?,
        Commands::Search {
            title,
            genre,
            director,
            from,
            to,
            content_type,
            limit,
        } => {
            let criteria = SearchCriteria {
                title,
                genre,
                director,
                from,
                to,
                content_type,
            };
            handle_search(&service, &criteria, limit, cli.json)?
        }
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(service, &config, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    service: &RecommendationService,
    params: &QueryParams,
    json: bool,
    explain: bool,
) -> Result<()> {
    let outcome = service.recommend(params)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        RecommendationOutcome::Matches(titles) => print_recommendations(&titles, explain),
        RecommendationOutcome::NoMatches => {
            println!("{}", "No matches found. Try broadening your filters.".yellow())
        }
    }
    Ok(())
}

/// Handle the 'options' command
fn handle_options(service: &RecommendationService, json: bool, list_directors: bool) -> Result<()> {
    let options = service.options();

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    let summary = options.summary();
    let snapshot = service.snapshot();
    println!("{}", "Filter options:".bold().blue());
    println!("{}Genres: {}", "• ".green(), summary.genres);
    println!("{}Directors (2+ titles): {}", "• ".green(), summary.directors);
    println!("{}Countries (6+ titles): {}", "• ".green(), summary.countries);
    if let Some((lo, hi)) = snapshot.catalog().year_range() {
        println!("{}Release years: {} - {}", "• ".green(), lo, hi);
    }

    println!("\n{}", "Genres:".bold());
    for genre in options.genres.iter().skip(1) {
        println!("  {genre}");
    }
    println!("\n{}", "Countries:".bold());
    for country in options.countries.iter().skip(1) {
        println!("  {country}");
    }
    if list_directors {
        println!("\n{}", "Directors:".bold());
        for director in options.directors.iter().skip(1) {
            println!("  {director}");
        }
    }
    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(service: &RecommendationService, json: bool) -> Result<()> {
    let analysis = service.analysis();

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("{}", "Catalog statistics:".bold().blue());
    println!("{}Total titles: {}", "• ".green(), analysis.total_count);
    println!("{}Movies: {}", "• ".green(), analysis.movie_count);
    println!("{}TV shows: {}", "• ".green(), analysis.tv_show_count);
    if analysis.unknown_year_count > 0 {
        println!("{}Unknown release year: {}", "• ".yellow(), analysis.unknown_year_count);
    }

    println!("\n{}", "Top genres:".bold());
    for (rank, (genre, count)) in analysis.top_genres.iter().enumerate() {
        println!("  {:>2}. {} ({})", rank + 1, genre, count);
    }
    println!("\n{}", "Top countries:".bold());
    for (rank, (country, count)) in analysis.top_countries.iter().enumerate() {
        println!("  {:>2}. {} ({})", rank + 1, country, count);
    }
    println!("\n{}", "Titles by release year:".bold());
    for (year, count) in &analysis.year_distribution {
        println!("  {year}: {count}");
    }
    Ok(())
}

struct SearchCriteria {
    title: Option<String>,
    genre: Option<String>,
    director: Option<String>,
    from: Option<u16>,
    to: Option<u16>,
    content_type: Option<String>,
}

/// Handle the 'search' command
fn handle_search(
    service: &RecommendationService,
    criteria: &SearchCriteria,
    limit: usize,
    json: bool,
) -> Result<()> {
    let snapshot = service.snapshot();
    let catalog = snapshot.catalog();

    let mut matches: Vec<&TitleRecord> = match &criteria.title {
        Some(title) => catalog.search_title(title),
        None => catalog.titles().iter().collect(),
    };
    if let Some(genre) = &criteria.genre {
        retain_in(&mut matches, catalog.titles_by_genre(genre));
    }
    if let Some(director) = &criteria.director {
        retain_in(&mut matches, catalog.titles_by_director(director));
    }
    if criteria.from.is_some() || criteria.to.is_some() {
        let from = criteria.from.unwrap_or(u16::MIN);
        let to = criteria.to.unwrap_or(u16::MAX);
        retain_in(&mut matches, catalog.titles_in_year_range(from, to));
    }
    if let Some(text) = &criteria.content_type {
        let content_type = ContentType::from_wire(text)
            .ok_or_else(|| anyhow!("Unknown content type '{}' (expected Movie or TV Show)", text))?;
        retain_in(&mut matches, catalog.titles_of_type(content_type));
    }

    let total = matches.len();
    matches.truncate(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Search results ({} of {}):", matches.len(), total).bold().blue()
    );
    for title in matches {
        println!(
            "{} ({}) [{}] {}",
            title.title,
            format_year(title.release_year),
            title.content_type,
            title.listed_in.dimmed()
        );
    }
    Ok(())
}

fn retain_in(matches: &mut Vec<&TitleRecord>, allowed: Vec<&TitleRecord>) {
    let ids: HashSet<TitleId> = allowed.iter().map(|t| t.id).collect();
    matches.retain(|t| ids.contains(&t.id));
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    service: RecommendationService,
    config: &Config,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 || concurrent == 0 {
        bail!("requests and concurrent must both be at least 1");
    }

    // Pick random genres from the option vocabulary
    let genres: Vec<String> = service.options().genres.into_iter().skip(1).collect();
    if genres.is_empty() {
        bail!("Catalog has no genres to query");
    }
    let queries: Vec<QueryParams> = {
        let mut rng = rand::rng();
        (0..requests)
            .map(|_| {
                let genre = genres.choose(&mut rng).cloned().unwrap_or_default();
                QueryParams::new(config.default_limit, config.default_min_year).with_genre(genre)
            })
            .collect()
    };

    let semaphore = Arc::new(Semaphore::new(concurrent));
    let wall_clock = Instant::now();
    let mut handles = vec![];
    for params in queries {
        let permit = semaphore.clone().acquire_owned().await?;
        let service = service.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let start = Instant::now();
            service.recommend(&params)?;
            Ok::<_, anyhow::Error>(start.elapsed())
        }));
    }

    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for handle in handles {
        timings.push(handle.await.context("Benchmark task panicked")??);
    }
    let total_time = wall_clock.elapsed();

    let summed: Duration = timings.iter().sum();
    let avg_latency = summed / timings.len() as u32;
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} concurrent)", requests, concurrent);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[ScoredTitle], explain: bool) {
    println!("{}", "Recommendations:".bold().blue());
    for (rank, rec) in recommendations.iter().enumerate() {
        let title = &rec.title;
        println!(
            "{}. {} ({}) [{}] - Score: {:.1}",
            (rank + 1).to_string().green(),
            title.title.bold(),
            format_year(title.release_year),
            title.content_type,
            rec.popularity_score
        );
        println!("   {}", title.listed_in.dimmed());
        if explain {
            println!(
                "   Recency bonus: {:.1}, genres: {} (+{:.1})",
                rec.recency_bonus,
                rec.genre_count,
                rec.popularity_score - rec.recency_bonus
            );
            if !title.director.is_empty() {
                println!("   Director: {}", title.director);
            }
            if !title.country.is_empty() {
                println!("   Country: {}", title.country);
            }
            if let Some(rating) = &title.rating {
                println!("   Rating: {}", rating);
            }
            if let Some(description) = &title.description {
                println!("   {}", description.italic());
            }
        }
    }
}

fn format_year(year: Option<u16>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| "????".to_string())
}

use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use crave_radar::core::config::{self, CliOverrides, RadarConfig, ResolvedConfig};
use crave_radar::core::pipeline::{SearchQuery, run_search};
use crave_radar::location::{self, FixedLocationService, LocationService};
use crave_radar::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "crave-radar", about = "Find well-rated restaurants near you")]
struct Args {
    /// Latitude of your position
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude of your position
    #[arg(long, allow_hyphen_values = true)]
    lng: Option<f64>,

    /// Cuisine keyword to search on startup (e.g. italian, Fast_food)
    #[arg(short, long)]
    cuisine: Option<String>,

    /// Only vegetarian places
    #[arg(long)]
    veg: bool,

    /// Run one search, print the ranked list and exit
    #[arg(long)]
    print: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to crave-radar.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("crave-radar.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            RadarConfig::default()
        }
    };
    let cli = CliOverrides {
        latitude: args.lat,
        longitude: args.lng,
        cuisine: args.cuisine,
        veg_only: args.veg,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Crave Radar starting up (location configured: {}, cuisine: {:?}, veg: {})",
        resolved.location.is_some(),
        resolved.default_cuisine,
        resolved.veg_only
    );

    let location_service: Arc<dyn LocationService> =
        Arc::new(FixedLocationService::new(resolved.location));

    if args.print {
        return print_once(&resolved, location_service.as_ref()).await;
    }

    tui::run(resolved, location_service)
}

/// Headless mode: one search, ranked lines on stdout.
async fn print_once(
    config: &ResolvedConfig,
    location_service: &dyn LocationService,
) -> std::io::Result<()> {
    let provider = tui::build_provider(config).map_err(std::io::Error::other)?;
    let origin = location::acquire(location_service)
        .await
        .map_err(std::io::Error::other)?;
    let cuisine = config.default_cuisine.clone().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "--print needs a cuisine (--cuisine or [search].default_cuisine)",
        )
    })?;

    let query = SearchQuery::new(origin, cuisine, config.veg_only);
    let restaurants = run_search(provider.as_ref(), &query)
        .await
        .map_err(std::io::Error::other)?;

    if restaurants.is_empty() {
        println!("No restaurants");
    }
    for (i, r) in restaurants.iter().enumerate() {
        let badge = if r.is_top_pick() { " 🔥" } else { "" };
        println!(
            "{:>2}. {} {}{} | ⭐ {} | {} m | {}",
            i + 1,
            r.icon,
            r.name,
            badge,
            r.rating,
            r.distance_m.round() as u64,
            r.open_state.label()
        );
        println!("    📍 {}", r.address);
    }
    Ok(())
}

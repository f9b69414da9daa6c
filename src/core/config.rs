//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.crave-radar/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Search radius and the rating floor are deliberately not configurable; see
//! `core::pipeline`.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::geo::Coordinate;
use crate::places::google::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RadarConfig {
    #[serde(default)]
    pub places: PlacesConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Default, Deserialize, Serialize)]
pub struct PlacesConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl fmt::Debug for PlacesConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacesConfig")
            .field("api_key", &redact_key(&self.api_key))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Stand-in for a secret in `Debug` output.
fn redact_key(key: &Option<String>) -> Option<&'static str> {
    key.as_ref().map(|_| "***")
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LocationConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    pub default_cuisine: Option<String>,
    pub veg_only: Option<bool>,
}

/// Values given on the command line. `None`/`false` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub cuisine: Option<String>,
    pub veg_only: bool,
}

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Clone)]
pub struct ResolvedConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    /// `None` when no source supplied both latitude and longitude.
    pub location: Option<Coordinate>,
    pub default_cuisine: Option<String>,
    pub veg_only: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            location: None,
            default_cuisine: None,
            veg_only: false,
        }
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("api_key", &redact_key(&self.api_key))
            .field("base_url", &self.base_url)
            .field("location", &self.location)
            .field("default_cuisine", &self.default_cuisine)
            .field("veg_only", &self.veg_only)
            .finish()
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.crave-radar/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".crave-radar").join("config.toml"))
}

/// Load config from `~/.crave-radar/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `RadarConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<RadarConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(RadarConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(RadarConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<RadarConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RadarConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Crave Radar Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [places]
# api_key = "AIza..."                # Or set GOOGLE_PLACES_API_KEY env var
# base_url = "https://maps.googleapis.com/maps/api/place"

# [location]
# latitude = 12.9716                 # Or CRAVE_RADAR_LAT / --lat
# longitude = 77.5946                # Or CRAVE_RADAR_LNG / --lng

# [search]
# default_cuisine = "italian"        # italian, chinese, indian, mexican, japanese, dessert, Fast_food
# veg_only = false
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &RadarConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env<F>(config: &RadarConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // API key: env → config
    let api_key = env("GOOGLE_PLACES_API_KEY")
        .or_else(|| config.places.api_key.clone())
        .filter(|k| !k.trim().is_empty());

    // Base URL: env → config → default
    let base_url = env("PLACES_BASE_URL")
        .or_else(|| config.places.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Coordinates: CLI → env → config, per axis
    let latitude = cli
        .latitude
        .or_else(|| env_f64(&env, "CRAVE_RADAR_LAT"))
        .or(config.location.latitude);
    let longitude = cli
        .longitude
        .or_else(|| env_f64(&env, "CRAVE_RADAR_LNG"))
        .or(config.location.longitude);
    let location = match (latitude, longitude) {
        (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)),
        (None, None) => None,
        _ => {
            warn!("Only one of latitude/longitude is set; ignoring location");
            None
        }
    };

    // Cuisine: CLI → config
    let default_cuisine = cli
        .cuisine
        .clone()
        .or_else(|| config.search.default_cuisine.clone())
        .filter(|c| !c.is_empty());

    // --veg can only switch the filter on
    let veg_only = cli.veg_only || config.search.veg_only.unwrap_or(false);

    ResolvedConfig {
        api_key,
        base_url,
        location,
        default_cuisine,
        veg_only,
    }
}

fn env_f64<F>(env: &F, key: &str) -> Option<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = env(key)?;
    match raw.trim().parse::<f64>() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}

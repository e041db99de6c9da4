//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file into the environment if one exists
//! 2. If `SLOTWISE_TIMEZONE` is set, builds the configuration from the
//!    environment
//! 3. Otherwise probes for a config file; JSON and TOML are supported
//! 4. With no file anywhere, falls back to the defaults
//!
//! Every path ends in [`validate`], so an unknown time zone is rejected at
//! load time instead of on the first planning call.
//!
//! ## Environment Variables
//! - `SLOTWISE_TIMEZONE`: IANA business time zone (selects env loading)
//! - `SLOTWISE_DISPLAY_START_HOUR` / `SLOTWISE_DISPLAY_END_HOUR`: calendar
//!   display window
//! - `SLOTWISE_SLOT_HEIGHT`: pixels per hour
//! - `SLOTWISE_MIN_CARD_HEIGHT`: minimum card height
//! - `SLOTWISE_WEEK_STARTS_ON`: `monday` or `sunday`
//! - `SLOTWISE_SNAP_MINUTES`: drop snap granularity
//! - `SLOTWISE_CELL_HEIGHT`: height of one hour cell in the drop grid
//! - `SLOTWISE_LOG_LEVEL`: `EnvFilter` directive
//! - `SLOTWISE_LOG_FORMAT`: `pretty`, `compact` or `json`
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./slotwise.json` or `./slotwise.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. The same names next to the executable

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use slotwise_core::BusinessZone;
use slotwise_domain::{Config, Result, SlotwiseError};

const FILE_NAMES: [&str; 4] = ["slotwise.json", "slotwise.toml", "config.json", "config.toml"];
const PARENT_LEVELS: [&str; 3] = [".", "..", "../.."];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `SlotwiseError::Config` if:
/// - An environment variable or file holds an invalid value
/// - A found file cannot be read or parsed
/// - The result fails validation
pub fn load() -> Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    if std::env::var("SLOTWISE_TIMEZONE").is_ok() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No configuration file found, using defaults");
            let config = Config::default();
            validate(&config)?;
            Ok(config)
        }
    }
}

/// Load configuration from environment variables
///
/// `SLOTWISE_TIMEZONE` is required; every other variable falls back to its
/// default.
///
/// # Errors
/// Returns `SlotwiseError::Config` if `SLOTWISE_TIMEZONE` is missing, a
/// variable does not parse, or the result fails validation.
pub fn load_from_env() -> Result<Config> {
    let defaults = Config::default();
    let mut config = defaults.clone();

    config.business.timezone = env_var("SLOTWISE_TIMEZONE")?;

    config.calendar.display_start_hour =
        env_parse("SLOTWISE_DISPLAY_START_HOUR", defaults.calendar.display_start_hour)?;
    config.calendar.display_end_hour =
        env_parse("SLOTWISE_DISPLAY_END_HOUR", defaults.calendar.display_end_hour)?;
    config.calendar.slot_height = env_parse("SLOTWISE_SLOT_HEIGHT", defaults.calendar.slot_height)?;
    config.calendar.min_card_height =
        env_parse("SLOTWISE_MIN_CARD_HEIGHT", defaults.calendar.min_card_height)?;
    config.calendar.week_starts_on =
        env_parse("SLOTWISE_WEEK_STARTS_ON", defaults.calendar.week_starts_on)?;

    config.reschedule.snap_minutes =
        env_parse("SLOTWISE_SNAP_MINUTES", defaults.reschedule.snap_minutes)?;
    config.reschedule.cell_height =
        env_parse("SLOTWISE_CELL_HEIGHT", defaults.reschedule.cell_height)?;

    if let Ok(level) = std::env::var("SLOTWISE_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.format = env_parse("SLOTWISE_LOG_FORMAT", defaults.logging.format)?;

    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `SlotwiseError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid or the result fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SlotwiseError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SlotwiseError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SlotwiseError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`); missing
/// sections and fields take their defaults.
///
/// # Errors
/// Returns `SlotwiseError::Config` if format is invalid or parsing fails.
pub fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SlotwiseError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SlotwiseError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(SlotwiseError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Check everything a loaded configuration must satisfy.
///
/// # Errors
/// Returns `SlotwiseError::Config` for an unknown time zone, an empty
/// display window, a snap not dividing an hour or non-positive heights.
pub fn validate(config: &Config) -> Result<()> {
    config.validate()?;
    BusinessZone::from_name(&config.business.timezone)?;
    Ok(())
}

/// Probe the standard locations for a configuration file
///
/// Searches the working directory and its two parents, then the directory
/// of the executable and its two parents.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd_hit = std::env::current_dir().ok().and_then(|cwd| probe_config_paths_from(&cwd));
    cwd_hit.or_else(|| {
        let exe = std::env::current_exe().ok()?;
        probe_config_paths_from(exe.parent()?)
    })
}

/// Probe `base` and its two parents for a configuration file.
pub fn probe_config_paths_from(base: &Path) -> Option<PathBuf> {
    PARENT_LEVELS
        .iter()
        .flat_map(|level| FILE_NAMES.iter().map(move |name| base.join(level).join(name)))
        .find(|path| path.is_file())
}

/// Get required environment variable
///
/// # Errors
/// Returns `SlotwiseError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| SlotwiseError::Config(format!("Missing required environment variable: {key}")))
}

/// Parse an optional environment variable, using `default` when unset
///
/// # Errors
/// Returns `SlotwiseError::Config` if the variable is set but does not
/// parse.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| SlotwiseError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(default),
    }
}

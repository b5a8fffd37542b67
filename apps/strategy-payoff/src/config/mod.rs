//! Configuration module for the payoff engine.
//!
//! Loads the price grid, file locations and logging settings from YAML,
//! with environment variable interpolation and validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use strategy_payoff::config::{Config, load_config};
//!
//! // Load from default path (strategy.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/strategy.yaml"))?;
//!
//! println!("grid: {}..{}", config.grid.s_min, config.grid.s_max);
//! ```

mod grid;
mod observability;
mod storage;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use grid::GridConfig;
pub use observability::{LOG_FORMATS, LoggingConfig, ObservabilityConfig};
pub use storage::StorageConfig;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "strategy.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Payoff grid configuration.
    #[serde(default)]
    pub grid: GridConfig,
    /// Strategy and export file locations.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "strategy.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// An empty document yields the defaults.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = if interpolated.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml_bw::from_str(&interpolated)?
    };
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let grid = &config.grid;

    if grid.resolution < 2 {
        return Err(ConfigError::ValidationError(format!(
            "grid.resolution must be at least 2, got {}",
            grid.resolution
        )));
    }

    if !grid.s_min.is_finite() || !grid.s_max.is_finite() {
        return Err(ConfigError::ValidationError(
            "grid.s_min and grid.s_max must be finite".to_string(),
        ));
    }

    if grid.s_min >= grid.s_max {
        return Err(ConfigError::ValidationError(format!(
            "grid.s_min ({}) must be below grid.s_max ({})",
            grid.s_min, grid.s_max
        )));
    }

    if config.storage.strategy_file.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "storage.strategy_file must not be empty".to_string(),
        ));
    }

    if config.storage.export_file.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "storage.export_file must not be empty".to_string(),
        ));
    }

    let format = config.observability.logging.format.as_str();
    if !LOG_FORMATS.contains(&format) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    Ok(())
}

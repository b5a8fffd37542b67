//! Tracing Setup
//!
//! Initializes the global `tracing` subscriber from [`LoggingConfig`].
//!
//! # Configuration
//!
//! - `RUST_LOG`: overrides `observability.logging.level` when set
//! - `observability.logging.format`: `json` (default), `pretty` or `compact`
//!
//! # Usage
//!
//! ```rust,ignore
//! use strategy_payoff::telemetry::init_tracing;
//!
//! let config = load_config(None)?;
//! init_tracing(&config.observability.logging)?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Error returned when a global subscriber is already installed.
pub type TelemetryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Build the filter: `RUST_LOG` if set, otherwise the configured level.
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Fails if a global subscriber has already been set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(config));

    match config.format.as_str() {
        "pretty" => builder.pretty().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder.json().try_init(),
    }
}

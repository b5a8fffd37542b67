//! Strategy Payoff Binary
//!
//! Batch front end for the payoff engine: loads a saved strategy, evaluates
//! it over the configured price grid, writes the `Spot,Net_Payoff` export
//! and logs a summary of the net curve.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin strategy-payoff
//! ```
//!
//! # Environment Variables
//!
//! - `STRATEGY_CONFIG`: Path to the YAML config (default: `strategy.yaml`
//!   if present, built-in defaults otherwise)
//! - `RUST_LOG`: Log filter (overrides `observability.logging.level`)

use std::path::Path;

use anyhow::{Context, Result};
use strategy_payoff::config::{Config, DEFAULT_CONFIG_PATH, load_config};
use strategy_payoff::telemetry::init_tracing;
use strategy_payoff::{CsvPayoffExporter, CsvStrategyStore, StrategySession};

fn main() -> Result<()> {
    let config = resolve_config()?;

    init_tracing(&config.observability.logging)
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to initialize tracing")?;

    tracing::info!(
        strategy_file = %config.storage.strategy_file,
        export_file = %config.storage.export_file,
        s_min = config.grid.s_min,
        s_max = config.grid.s_max,
        resolution = config.grid.resolution,
        "Configuration loaded"
    );

    let mut session = StrategySession::new();
    let store = CsvStrategyStore::new(&config.storage.strategy_file);
    session
        .load(&store)
        .with_context(|| format!("failed to load strategy '{}'", config.storage.strategy_file))?;

    for (index, label) in session.labels().iter().enumerate() {
        tracing::info!(index, leg = %label, "Leg");
    }

    let grid = &config.grid;
    let curve = session
        .payoff_curve(grid.s_min, grid.s_max, grid.resolution)
        .context("failed to compute payoff curve")?;

    let exporter = CsvPayoffExporter::new(&config.storage.export_file);
    session
        .export(&curve, &exporter)
        .with_context(|| format!("failed to export to '{}'", config.storage.export_file))?;

    let summary = serde_json::to_string(&curve.summary()).context("failed to encode summary")?;
    tracing::info!(summary = %summary, "Net payoff summary");

    Ok(())
}

/// Pick the config file: `STRATEGY_CONFIG`, then `strategy.yaml`, then defaults.
fn resolve_config() -> Result<Config> {
    if let Ok(path) = std::env::var("STRATEGY_CONFIG") {
        return load_config(Some(&path)).with_context(|| format!("failed to load config '{path}'"));
    }

    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        return load_config(None)
            .with_context(|| format!("failed to load config '{DEFAULT_CONFIG_PATH}'"));
    }

    Ok(Config::default())
}

// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines
    )
)]

//! Strategy Payoff - Rust Core Library
//!
//! Builds multi-leg option and stock positions and evaluates their
//! profit/loss at expiry across a range of underlying prices.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure position and payoff logic
//!   - `strategy`: Option/stock legs, `Payoff` capability, `Portfolio`, records
//!   - `payoff`: Price grid, per-leg and net curves, curve summary
//!
//! - **Application**: Session orchestration
//!   - `ports`: `StrategyStorePort`, `PayoffExportPort`
//!   - `services`: `StrategySession` owning the portfolio
//!
//! - **Infrastructure**: Adapters
//!   - `persistence`: CSV strategy files, CSV payoff export, in-memory stores
//!
//! # Example
//!
//! ```
//! use strategy_payoff::{OptionLeg, Payoff, Portfolio};
//!
//! let mut portfolio = Portfolio::new();
//! portfolio.add_option(OptionLeg::long_call(100.0, 5.0)?);
//! portfolio.add_option(OptionLeg::short_call(110.0, 2.0)?);
//!
//! let curve = portfolio.payoff_curve(0.0, 200.0, 1001)?;
//! assert_eq!(curve.spots().len(), 1001);
//! assert_eq!(portfolio.options()[0].payoff(120.0), 15.0);
//! # Ok::<(), strategy_payoff::StrategyError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core logic with no external dependencies.
pub mod domain;

/// Application layer - Session service and port definitions.
pub mod application;

/// Infrastructure layer - Storage adapters.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::payoff::{
    CurvePoint, CurveSummary, DEFAULT_RESOLUTION, LegCurve, PayoffCurve, PriceGrid,
    compute_payoff_curve,
};
pub use domain::strategy::{
    Leg, LegRecord, OptionLeg, OptionRight, Payoff, Portfolio, PositionSide, RecordType,
    StockLeg, StockSide, StrategyError,
};

// Application re-exports
pub use application::ports::{PayoffExportPort, StoreError, StrategyStorePort};
pub use application::services::StrategySession;

// Infrastructure re-exports
pub use infrastructure::persistence::{
    CsvPayoffExporter, CsvStrategyStore, InMemoryPayoffExporter, InMemoryStrategyStore,
    deserialize_portfolio, export_payoff_csv, serialize_portfolio,
};

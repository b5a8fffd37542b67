//! Payoff Bounded Context
//!
//! Evaluates legs over a shared price grid at expiry:
//! - `PriceGrid`: evenly spaced spots between two bounds
//! - `compute_payoff_curve`: per-leg curves and their elementwise sum
//! - `CurveSummary`: extremes and breakevens of the net curve

mod curve;
mod price_grid;
mod summary;

pub use curve::{LegCurve, PayoffCurve, compute_payoff_curve};
pub use price_grid::{DEFAULT_RESOLUTION, PriceGrid};
pub use summary::{CurvePoint, CurveSummary};

//! Payoff Aggregation
//!
//! Evaluates each leg over a shared grid and sums the results.

use serde::{Deserialize, Serialize};

use super::{CurveSummary, PriceGrid};
use crate::domain::strategy::{Payoff, StrategyError};

/// One leg's payoff over the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegCurve {
    /// Leg label at evaluation time.
    pub label: String,
    /// Payoff at each grid point.
    pub values: Vec<f64>,
}

/// Output of the aggregation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffCurve {
    grid: PriceGrid,
    legs: Vec<LegCurve>,
    net: Vec<f64>,
}

impl PayoffCurve {
    /// The evaluation grid.
    #[must_use]
    pub const fn grid(&self) -> &PriceGrid {
        &self.grid
    }

    /// Grid points.
    #[must_use]
    pub fn spots(&self) -> &[f64] {
        self.grid.points()
    }

    /// Per-leg curves in leg order.
    #[must_use]
    pub fn leg_curves(&self) -> &[LegCurve] {
        &self.legs
    }

    /// Elementwise sum of all leg curves.
    #[must_use]
    pub fn net(&self) -> &[f64] {
        &self.net
    }

    /// `(spot, net payoff)` pairs, the projection used for export.
    pub fn net_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.spots().iter().copied().zip(self.net.iter().copied())
    }

    /// Extremes and breakevens of the net curve.
    #[must_use]
    pub fn summary(&self) -> CurveSummary {
        CurveSummary::from_curve(self.spots(), &self.net)
    }

    /// Split into `(grid, per-leg curves, net curve)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<LegCurve>, Vec<f64>) {
        let spots = self.grid.points().to_vec();
        (spots, self.legs, self.net)
    }
}

/// Evaluate legs over `resolution` evenly spaced spots in `[s_min, s_max]`.
///
/// The net curve is all zeros when `legs` is empty. Fails with
/// `InvalidArgument` when the grid cannot be built (see [`PriceGrid::linspace`]).
pub fn compute_payoff_curve<I, L>(
    legs: I,
    s_min: f64,
    s_max: f64,
    resolution: usize,
) -> Result<PayoffCurve, StrategyError>
where
    I: IntoIterator<Item = L>,
    L: Payoff,
{
    let grid = PriceGrid::linspace(s_min, s_max, resolution)?;
    let mut net = vec![0.0; grid.len()];

    let legs: Vec<LegCurve> = legs
        .into_iter()
        .map(|leg| {
            let values = leg.payoff_curve(grid.points());
            for (total, value) in net.iter_mut().zip(&values) {
                *total += value;
            }
            LegCurve {
                label: leg.label(),
                values,
            }
        })
        .collect();

    Ok(PayoffCurve { grid, legs, net })
}

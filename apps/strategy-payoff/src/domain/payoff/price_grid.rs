//! Price Grid Value Object

use serde::{Deserialize, Serialize};

use crate::domain::strategy::StrategyError;

/// Number of grid points used when the caller does not choose one.
pub const DEFAULT_RESOLUTION: usize = 1001;

/// Evenly spaced underlying prices from `s_min` to `s_max` inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceGrid {
    points: Vec<f64>,
}

impl PriceGrid {
    /// Build a grid of `resolution` points.
    ///
    /// Requires `resolution >= 2`, finite bounds, `s_min < s_max` and a
    /// finite width `s_max - s_min`.
    /// The first point is exactly `s_min` and the last exactly `s_max`.
    pub fn linspace(s_min: f64, s_max: f64, resolution: usize) -> Result<Self, StrategyError> {
        if resolution < 2 {
            return Err(StrategyError::invalid_argument(format!(
                "resolution must be at least 2, got {resolution}"
            )));
        }
        if !s_min.is_finite() || !s_max.is_finite() {
            return Err(StrategyError::invalid_argument(format!(
                "price bounds must be finite, got [{s_min}, {s_max}]"
            )));
        }
        if s_min >= s_max {
            return Err(StrategyError::invalid_argument(format!(
                "s_min must be below s_max, got [{s_min}, {s_max}]"
            )));
        }

        let width = s_max - s_min;
        if !width.is_finite() {
            return Err(StrategyError::invalid_argument(format!(
                "price range is too wide, got [{s_min}, {s_max}]"
            )));
        }

        let last = resolution - 1;
        let step = width / last as f64;
        let points = (0..resolution)
            .map(|i| if i == last { s_max } else { s_min + i as f64 * step })
            .collect();

        Ok(Self { points })
    }

    /// Grid points in ascending order.
    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the grid has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Lower bound.
    #[must_use]
    pub fn s_min(&self) -> f64 {
        self.points.first().copied().unwrap_or_default()
    }

    /// Upper bound.
    #[must_use]
    pub fn s_max(&self) -> f64 {
        self.points.last().copied().unwrap_or_default()
    }
}

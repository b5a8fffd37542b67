//! Net curve summary: extremes and breakevens over the grid.

use serde::{Deserialize, Serialize};

/// A spot and the net payoff there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Underlying price.
    pub spot: f64,
    /// Net payoff at `spot`.
    pub value: f64,
}

/// Summary of a net payoff curve, limited to what the grid shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSummary {
    /// Highest net payoff on the grid (first occurrence).
    pub max_profit: Option<CurvePoint>,
    /// Lowest net payoff on the grid (first occurrence).
    pub max_loss: Option<CurvePoint>,
    /// Spots where the net curve crosses or touches zero, ascending.
    pub breakevens: Vec<f64>,
}

impl CurveSummary {
    /// Summarize a net curve sampled at `spots`.
    ///
    /// Sign changes between adjacent points are located by linear
    /// interpolation. A run of exact zeros contributes only its first spot.
    #[must_use]
    pub fn from_curve(spots: &[f64], net: &[f64]) -> Self {
        let points: Vec<CurvePoint> = spots
            .iter()
            .zip(net)
            .map(|(&spot, &value)| CurvePoint { spot, value })
            .collect();

        let max_profit = points.iter().copied().reduce(|best, p| {
            if p.value > best.value { p } else { best }
        });
        let max_loss = points.iter().copied().reduce(|worst, p| {
            if p.value < worst.value { p } else { worst }
        });

        let mut breakevens = Vec::new();
        let mut previous: Option<CurvePoint> = None;
        for point in &points {
            match previous {
                Some(prev) if prev.value == 0.0 => {}
                Some(prev) if point.value != 0.0 && prev.value.signum() != point.value.signum() => {
                    let t = prev.value / (prev.value - point.value);
                    breakevens.push(prev.spot + t * (point.spot - prev.spot));
                }
                _ => {}
            }
            if point.value == 0.0 && previous.is_none_or(|prev| prev.value != 0.0) {
                breakevens.push(point.spot);
            }
            previous = Some(*point);
        }

        Self {
            max_profit,
            max_loss,
            breakevens,
        }
    }
}

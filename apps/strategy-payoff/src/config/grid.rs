//! Price grid configuration for payoff evaluation.

use serde::{Deserialize, Serialize};

use crate::domain::payoff::DEFAULT_RESOLUTION;

/// Price range and resolution of the payoff grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Lowest underlying price.
    #[serde(default)]
    pub s_min: f64,
    /// Highest underlying price.
    #[serde(default = "default_s_max")]
    pub s_max: f64,
    /// Number of grid points.
    #[serde(default = "default_resolution")]
    pub resolution: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            s_min: 0.0,
            s_max: default_s_max(),
            resolution: default_resolution(),
        }
    }
}

const fn default_s_max() -> f64 {
    200.0
}

const fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}

//! Leg Capability and Variant

use serde::{Deserialize, Serialize};

use super::{OptionLeg, StockLeg};
use crate::domain::strategy::StrategyError;

/// Profit/loss at expiry as a function of the underlying price.
///
/// Implementations must be total over all real spots.
pub trait Payoff {
    /// Signed profit/loss at a single spot.
    fn payoff(&self, spot: f64) -> f64;

    /// Human-readable summary used for display and removal selection.
    fn label(&self) -> String;

    /// Evaluate the payoff at every spot, elementwise.
    fn payoff_curve(&self, spots: &[f64]) -> Vec<f64> {
        spots.iter().map(|&spot| self.payoff(spot)).collect()
    }
}

impl<T: Payoff + ?Sized> Payoff for &T {
    fn payoff(&self, spot: f64) -> f64 {
        (**self).payoff(spot)
    }

    fn label(&self) -> String {
        (**self).label()
    }
}

/// One constituent of a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Leg {
    /// Option leg.
    Option(OptionLeg),
    /// Stock leg.
    Stock(StockLeg),
}

impl Leg {
    /// Check if this is an option leg.
    #[must_use]
    pub const fn is_option(&self) -> bool {
        matches!(self, Self::Option(_))
    }

    /// Check if this is a stock leg.
    #[must_use]
    pub const fn is_stock(&self) -> bool {
        matches!(self, Self::Stock(_))
    }
}

impl Payoff for Leg {
    fn payoff(&self, spot: f64) -> f64 {
        match self {
            Self::Option(leg) => leg.payoff(spot),
            Self::Stock(leg) => leg.payoff(spot),
        }
    }

    fn label(&self) -> String {
        match self {
            Self::Option(leg) => leg.label(),
            Self::Stock(leg) => leg.label(),
        }
    }
}

impl From<OptionLeg> for Leg {
    fn from(leg: OptionLeg) -> Self {
        Self::Option(leg)
    }
}

impl From<StockLeg> for Leg {
    fn from(leg: StockLeg) -> Self {
        Self::Stock(leg)
    }
}

/// Reject negative and non-finite leg parameters.
pub(crate) fn ensure_non_negative(field: &str, value: f64) -> Result<f64, StrategyError> {
    if !value.is_finite() {
        return Err(StrategyError::invalid_argument(format!(
            "{field} must be finite, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(StrategyError::invalid_argument(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    Ok(value)
}

/// Label form of a real: shortest round-trip digits, plain notation with a
/// decimal point (`100.0`) inside `[1e-4, 1e16)`, otherwise a signed exponent
/// of at least two digits (`1e-05`, `2.5e+16`).
pub(crate) fn format_real(value: f64) -> String {
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

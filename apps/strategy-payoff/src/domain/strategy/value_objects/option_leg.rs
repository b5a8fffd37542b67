//! Option Leg Value Object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::leg::{Payoff, ensure_non_negative, format_real};
use crate::domain::strategy::StrategyError;

/// Position side of an option leg (long or short).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    /// Long position (bought, premium paid).
    Long,
    /// Short position (written, premium received).
    Short,
}

impl PositionSide {
    /// Storage form of the side.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
        }
    }

    /// Display form used in leg labels.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Long => "Long",
            Self::Short => "Short",
        }
    }
}

impl fmt::Display for PositionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PositionSide {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(Self::Long),
            "short" => Ok(Self::Short),
            other => Err(StrategyError::malformed(
                0,
                format!("unknown option position '{other}' (expected long or short)"),
            )),
        }
    }
}

/// Option right (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionRight {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
}

impl OptionRight {
    /// Storage form of the right.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Put => "put",
        }
    }

    /// Display form used in leg labels.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Call => "Call",
            Self::Put => "Put",
        }
    }

    /// Exercise value at expiry, ignoring premium.
    #[must_use]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            Self::Call => (spot - strike).max(0.0),
            Self::Put => (strike - spot).max(0.0),
        }
    }
}

impl fmt::Display for OptionRight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionRight {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "call" => Ok(Self::Call),
            "put" => Ok(Self::Put),
            other => Err(StrategyError::malformed(
                0,
                format!("unknown option type '{other}' (expected call or put)"),
            )),
        }
    }
}

/// A European option leg held to expiry.
///
/// Immutable once built. Replacing a leg means removing it from the
/// portfolio and adding a new one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OptionLegRaw", into = "OptionLegRaw")]
pub struct OptionLeg {
    /// Long or short.
    side: PositionSide,
    /// Call or put.
    right: OptionRight,
    /// Strike price.
    strike: f64,
    /// Premium per unit paid (long) or received (short) at entry.
    premium: f64,
}

#[derive(Serialize, Deserialize)]
struct OptionLegRaw {
    side: PositionSide,
    right: OptionRight,
    strike: f64,
    premium: f64,
}

impl TryFrom<OptionLegRaw> for OptionLeg {
    type Error = StrategyError;
    fn try_from(raw: OptionLegRaw) -> Result<Self, Self::Error> {
        Self::new(raw.side, raw.right, raw.strike, raw.premium)
    }
}

impl From<OptionLeg> for OptionLegRaw {
    fn from(leg: OptionLeg) -> Self {
        Self {
            side: leg.side,
            right: leg.right,
            strike: leg.strike,
            premium: leg.premium,
        }
    }
}

impl OptionLeg {
    /// Create a new option leg.
    ///
    /// Strike and premium must be finite and non-negative.
    pub fn new(
        side: PositionSide,
        right: OptionRight,
        strike: f64,
        premium: f64,
    ) -> Result<Self, StrategyError> {
        Ok(Self {
            side,
            right,
            strike: ensure_non_negative("strike", strike)?,
            premium: ensure_non_negative("premium", premium)?,
        })
    }

    /// Create a long call.
    pub fn long_call(strike: f64, premium: f64) -> Result<Self, StrategyError> {
        Self::new(PositionSide::Long, OptionRight::Call, strike, premium)
    }

    /// Create a short call.
    pub fn short_call(strike: f64, premium: f64) -> Result<Self, StrategyError> {
        Self::new(PositionSide::Short, OptionRight::Call, strike, premium)
    }

    /// Create a long put.
    pub fn long_put(strike: f64, premium: f64) -> Result<Self, StrategyError> {
        Self::new(PositionSide::Long, OptionRight::Put, strike, premium)
    }

    /// Create a short put.
    pub fn short_put(strike: f64, premium: f64) -> Result<Self, StrategyError> {
        Self::new(PositionSide::Short, OptionRight::Put, strike, premium)
    }

    /// Get the position side.
    #[must_use]
    pub const fn side(&self) -> PositionSide {
        self.side
    }

    /// Get the option right.
    #[must_use]
    pub const fn right(&self) -> OptionRight {
        self.right
    }

    /// Get the strike.
    #[must_use]
    pub const fn strike(&self) -> f64 {
        self.strike
    }

    /// Get the premium.
    #[must_use]
    pub const fn premium(&self) -> f64 {
        self.premium
    }

    /// Intrinsic value at the given spot.
    #[must_use]
    pub fn intrinsic(&self, spot: f64) -> f64 {
        self.right.intrinsic(spot, self.strike)
    }
}

impl Payoff for OptionLeg {
    fn payoff(&self, spot: f64) -> f64 {
        let intrinsic = self.intrinsic(spot);
        match self.side {
            PositionSide::Long => intrinsic - self.premium,
            PositionSide::Short => self.premium - intrinsic,
        }
    }

    fn label(&self) -> String {
        format!(
            "{} {} (K={}, P={})",
            self.side.title(),
            self.right.title(),
            format_real(self.strike),
            format_real(self.premium)
        )
    }
}

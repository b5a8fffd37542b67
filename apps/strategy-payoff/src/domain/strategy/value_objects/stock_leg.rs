//! Stock Leg Value Object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::leg::{Payoff, ensure_non_negative, format_real};
use crate::domain::strategy::StrategyError;

/// Direction of a stock leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockSide {
    /// Bought shares.
    Buy,
    /// Sold (short) shares.
    Sell,
}

impl StockSide {
    /// Storage form of the side.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }

    /// Display form used in leg labels.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }
}

impl fmt::Display for StockSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockSide {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            other => Err(StrategyError::malformed(
                0,
                format!("unknown stock position '{other}' (expected buy or sell)"),
            )),
        }
    }
}

/// A linear stock leg entered at a fixed price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StockLegRaw", into = "StockLegRaw")]
pub struct StockLeg {
    /// Buy or sell.
    side: StockSide,
    /// Entry price per share.
    entry_price: f64,
}

#[derive(Serialize, Deserialize)]
struct StockLegRaw {
    side: StockSide,
    entry_price: f64,
}

impl TryFrom<StockLegRaw> for StockLeg {
    type Error = StrategyError;
    fn try_from(raw: StockLegRaw) -> Result<Self, Self::Error> {
        Self::new(raw.side, raw.entry_price)
    }
}

impl From<StockLeg> for StockLegRaw {
    fn from(leg: StockLeg) -> Self {
        Self {
            side: leg.side,
            entry_price: leg.entry_price,
        }
    }
}

impl StockLeg {
    /// Create a new stock leg. The entry price must be finite and non-negative.
    pub fn new(side: StockSide, entry_price: f64) -> Result<Self, StrategyError> {
        Ok(Self {
            side,
            entry_price: ensure_non_negative("entry price", entry_price)?,
        })
    }

    /// Create a long stock leg.
    pub fn buy(entry_price: f64) -> Result<Self, StrategyError> {
        Self::new(StockSide::Buy, entry_price)
    }

    /// Create a short stock leg.
    pub fn sell(entry_price: f64) -> Result<Self, StrategyError> {
        Self::new(StockSide::Sell, entry_price)
    }

    /// Get the side.
    #[must_use]
    pub const fn side(&self) -> StockSide {
        self.side
    }

    /// Get the entry price.
    #[must_use]
    pub const fn entry_price(&self) -> f64 {
        self.entry_price
    }
}

impl Payoff for StockLeg {
    fn payoff(&self, spot: f64) -> f64 {
        match self.side {
            StockSide::Buy => spot - self.entry_price,
            StockSide::Sell => self.entry_price - spot,
        }
    }

    fn label(&self) -> String {
        format!(
            "{} Stock (Entry={})",
            self.side.title(),
            format_real(self.entry_price)
        )
    }
}

//! Portfolio Value Object

use serde::{Deserialize, Serialize};

use super::{Leg, LegRecord, OptionLeg, Payoff, StockLeg};
use crate::domain::payoff::{PayoffCurve, compute_payoff_curve};
use crate::domain::strategy::StrategyError;

/// The position under construction.
///
/// Options and stocks are kept in insertion order in two lists. The
/// combined order (all options, then all stocks) is the one used for
/// labels, index-based removal, aggregation and storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    options: Vec<OptionLeg>,
    stocks: Vec<StockLeg>,
}

impl Portfolio {
    /// Create an empty portfolio.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: Vec::new(),
            stocks: Vec::new(),
        }
    }

    /// Append an option leg.
    pub fn add_option(&mut self, leg: OptionLeg) {
        self.options.push(leg);
    }

    /// Append a stock leg.
    pub fn add_stock(&mut self, leg: StockLeg) {
        self.stocks.push(leg);
    }

    /// Append any leg to the list for its kind.
    pub fn push(&mut self, leg: impl Into<Leg>) {
        match leg.into() {
            Leg::Option(option) => self.add_option(option),
            Leg::Stock(stock) => self.add_stock(stock),
        }
    }

    /// Total number of legs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len() + self.stocks.len()
    }

    /// Check if the portfolio has no legs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.stocks.is_empty()
    }

    /// Option legs in insertion order.
    #[must_use]
    pub fn options(&self) -> &[OptionLeg] {
        &self.options
    }

    /// Stock legs in insertion order.
    #[must_use]
    pub fn stocks(&self) -> &[StockLeg] {
        &self.stocks
    }

    /// All legs, options first.
    pub fn legs(&self) -> impl Iterator<Item = Leg> + '_ {
        self.options
            .iter()
            .copied()
            .map(Leg::Option)
            .chain(self.stocks.iter().copied().map(Leg::Stock))
    }

    /// Leg at a combined index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Leg> {
        match index.checked_sub(self.options.len()) {
            None => self.options.get(index).copied().map(Leg::Option),
            Some(stock_index) => self.stocks.get(stock_index).copied().map(Leg::Stock),
        }
    }

    /// Labels of all legs in combined order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.legs().map(|leg| leg.label()).collect()
    }

    /// Remove the leg at a combined index and return it.
    pub fn remove_leg_at(&mut self, index: usize) -> Result<Leg, StrategyError> {
        let len = self.len();
        if index >= len {
            return Err(StrategyError::IndexOutOfRange { index, len });
        }

        let removed = match index.checked_sub(self.options.len()) {
            None => Leg::Option(self.options.remove(index)),
            Some(stock_index) => Leg::Stock(self.stocks.remove(stock_index)),
        };
        Ok(removed)
    }

    /// Remove every leg.
    pub fn clear(&mut self) {
        self.options.clear();
        self.stocks.clear();
    }

    /// Flat records, one per leg, in combined order.
    #[must_use]
    pub fn to_records(&self) -> Vec<LegRecord> {
        self.legs().map(|leg| LegRecord::from(&leg)).collect()
    }

    /// Build a portfolio from records, failing on the first bad record.
    ///
    /// Record errors carry the 1-based position of the record in `records`.
    pub fn from_records<'a, I>(records: I) -> Result<Self, StrategyError>
    where
        I: IntoIterator<Item = &'a LegRecord>,
    {
        let mut portfolio = Self::new();
        for (position, record) in records.into_iter().enumerate() {
            let leg = Leg::try_from(record).map_err(|e| e.at_line(position + 1))?;
            portfolio.push(leg);
        }
        Ok(portfolio)
    }

    /// Evaluate every leg and the net payoff over an evenly spaced grid.
    pub fn payoff_curve(
        &self,
        s_min: f64,
        s_max: f64,
        resolution: usize,
    ) -> Result<PayoffCurve, StrategyError> {
        compute_payoff_curve(self.legs(), s_min, s_max, resolution)
    }
}

impl FromIterator<Leg> for Portfolio {
    fn from_iter<I: IntoIterator<Item = Leg>>(iter: I) -> Self {
        let mut portfolio = Self::new();
        portfolio.extend(iter);
        portfolio
    }
}

impl Extend<Leg> for Portfolio {
    fn extend<I: IntoIterator<Item = Leg>>(&mut self, iter: I) {
        for leg in iter {
            self.push(leg);
        }
    }
}

//! Strategy Session Service
//!
//! Owns the portfolio for the lifetime of one user session and is the
//! single entry point the UI layer talks to: add and remove legs, compute
//! the payoff curve, save/load the strategy and export the net curve.

use crate::application::ports::{PayoffExportPort, StoreError, StrategyStorePort};
use crate::domain::payoff::PayoffCurve;
use crate::domain::strategy::{
    Leg, OptionLeg, OptionRight, Payoff, Portfolio, PositionSide, StockLeg, StockSide,
    StrategyError,
};

/// A user session holding the position being built.
#[derive(Debug, Clone, Default)]
pub struct StrategySession {
    portfolio: Portfolio,
}

impl StrategySession {
    /// Start a session with an empty portfolio.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            portfolio: Portfolio::new(),
        }
    }

    /// Start a session from an existing portfolio.
    #[must_use]
    pub const fn with_portfolio(portfolio: Portfolio) -> Self {
        Self { portfolio }
    }

    /// The current portfolio.
    #[must_use]
    pub const fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Labels in removal-index order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.portfolio.labels()
    }

    /// Add an option leg and return its label.
    pub fn add_option(
        &mut self,
        side: PositionSide,
        right: OptionRight,
        strike: f64,
        premium: f64,
    ) -> Result<String, StrategyError> {
        let leg = OptionLeg::new(side, right, strike, premium)?;
        let label = leg.label();
        self.portfolio.add_option(leg);
        tracing::info!(leg = %label, legs = self.portfolio.len(), "Option leg added");
        Ok(label)
    }

    /// Add a stock leg and return its label.
    pub fn add_stock(&mut self, side: StockSide, entry_price: f64) -> Result<String, StrategyError> {
        let leg = StockLeg::new(side, entry_price)?;
        let label = leg.label();
        self.portfolio.add_stock(leg);
        tracing::info!(leg = %label, legs = self.portfolio.len(), "Stock leg added");
        Ok(label)
    }

    /// Remove the leg at `index` in options-then-stocks order.
    pub fn remove_leg_at(&mut self, index: usize) -> Result<Leg, StrategyError> {
        match self.portfolio.remove_leg_at(index) {
            Ok(leg) => {
                tracing::info!(
                    index,
                    leg = %leg.label(),
                    legs = self.portfolio.len(),
                    "Leg removed"
                );
                Ok(leg)
            }
            Err(e) => {
                tracing::warn!(index, error = %e, "Leg removal rejected");
                Err(e)
            }
        }
    }

    /// Evaluate the portfolio over `[s_min, s_max]`.
    pub fn payoff_curve(
        &self,
        s_min: f64,
        s_max: f64,
        resolution: usize,
    ) -> Result<PayoffCurve, StrategyError> {
        let curve = self.portfolio.payoff_curve(s_min, s_max, resolution)?;
        tracing::debug!(
            legs = curve.leg_curves().len(),
            points = curve.spots().len(),
            s_min,
            s_max,
            "Payoff curve computed"
        );
        Ok(curve)
    }

    /// Persist the whole portfolio.
    pub fn save(&self, store: &impl StrategyStorePort) -> Result<(), StoreError> {
        store.save(&self.portfolio)?;
        tracing::info!(
            location = %store.location(),
            legs = self.portfolio.len(),
            "Strategy saved"
        );
        Ok(())
    }

    /// Replace the portfolio with the stored one and return its leg count.
    ///
    /// On failure the current portfolio is left exactly as it was.
    pub fn load(&mut self, store: &impl StrategyStorePort) -> Result<usize, StoreError> {
        match store.load() {
            Ok(portfolio) => {
                self.portfolio = portfolio;
                tracing::info!(
                    location = %store.location(),
                    legs = self.portfolio.len(),
                    "Strategy loaded"
                );
                Ok(self.portfolio.len())
            }
            Err(e) => {
                tracing::warn!(
                    location = %store.location(),
                    error = %e,
                    "Strategy load failed, keeping current portfolio"
                );
                Err(e)
            }
        }
    }

    /// Write the `(spot, net payoff)` projection of `curve`.
    pub fn export(
        &self,
        curve: &PayoffCurve,
        exporter: &impl PayoffExportPort,
    ) -> Result<(), StoreError> {
        exporter.export(curve)?;
        tracing::info!(
            location = %exporter.location(),
            points = curve.spots().len(),
            "Payoff curve exported"
        );
        Ok(())
    }
}

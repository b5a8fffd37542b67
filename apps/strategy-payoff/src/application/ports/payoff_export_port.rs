//! Payoff Export Port

use super::StoreError;
use crate::domain::payoff::PayoffCurve;

/// Sink for the `(spot, net payoff)` projection of a computed curve.
pub trait PayoffExportPort {
    /// Human-readable location used in logs and errors.
    fn location(&self) -> String;

    /// Write the net curve, replacing previous content.
    fn export(&self, curve: &PayoffCurve) -> Result<(), StoreError>;
}

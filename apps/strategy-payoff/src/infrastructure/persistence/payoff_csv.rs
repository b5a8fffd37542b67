//! Payoff export CSV: one `Spot,Net_Payoff` row per grid point.

use std::fmt::Write as _;

use crate::domain::payoff::PayoffCurve;

/// Header row of an export file.
pub const EXPORT_HEADER: &str = "Spot,Net_Payoff";

/// Render the net curve of `curve` as two-column CSV.
#[must_use]
pub fn export_payoff_csv(curve: &PayoffCurve) -> String {
    let mut csv = String::from(EXPORT_HEADER);
    csv.push('\n');

    for (spot, net) in curve.net_points() {
        let _ = writeln!(csv, "{spot:?},{net:?}");
    }

    csv
}

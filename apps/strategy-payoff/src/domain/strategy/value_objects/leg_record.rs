//! Flat Tabular Leg Record
//!
//! One row per leg with the columns `type`, `position`, `option_type`,
//! `strike_or_entry`, `premium`. Fields are kept as text so that decoding
//! validates the `type` tag before any leg is built.

use std::fmt;
use std::str::FromStr;

use super::{Leg, OptionLeg, OptionRight, PositionSide, StockLeg, StockSide};
use crate::domain::strategy::StrategyError;

/// The closed set of row types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// `option` row.
    Option,
    /// `stock` row.
    Stock,
}

impl RecordType {
    /// Storage form of the row type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Option => "option",
            Self::Stock => "stock",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "option" => Ok(Self::Option),
            "stock" => Ok(Self::Stock),
            other => Err(StrategyError::malformed(
                0,
                format!("unknown type '{other}' (expected option or stock)"),
            )),
        }
    }
}

/// A single stored row describing one leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegRecord {
    /// `option` or `stock`.
    pub record_type: String,
    /// Leg direction (`long`/`short` or `buy`/`sell`).
    pub position: String,
    /// `call`/`put` for options, empty for stock.
    pub option_type: String,
    /// Strike for options, entry price for stock.
    pub strike_or_entry: String,
    /// Premium for options, `0` for stock.
    pub premium: String,
}

impl LegRecord {
    /// Column names in storage order.
    pub const COLUMNS: [&'static str; 5] = [
        "type",
        "position",
        "option_type",
        "strike_or_entry",
        "premium",
    ];

    /// Build a record from its five fields in column order.
    #[must_use]
    pub fn from_fields(fields: [&str; 5]) -> Self {
        let [record_type, position, option_type, strike_or_entry, premium] = fields;
        Self {
            record_type: record_type.to_string(),
            position: position.to_string(),
            option_type: option_type.to_string(),
            strike_or_entry: strike_or_entry.to_string(),
            premium: premium.to_string(),
        }
    }

    /// Fields in column order.
    #[must_use]
    pub fn fields(&self) -> [&str; 5] {
        [
            self.record_type.as_str(),
            self.position.as_str(),
            self.option_type.as_str(),
            self.strike_or_entry.as_str(),
            self.premium.as_str(),
        ]
    }

    /// Decode the record into a leg.
    ///
    /// Errors are reported as `MalformedRecord` with line 0; callers reading
    /// from text attach the line with [`StrategyError::at_line`].
    pub fn to_leg(&self) -> Result<Leg, StrategyError> {
        let record_type: RecordType = self.record_type.parse()?;
        let strike_or_entry = parse_real("strike_or_entry", &self.strike_or_entry)?;
        let premium = parse_real("premium", &self.premium)?;

        let leg = match record_type {
            RecordType::Option => {
                let side: PositionSide = self.position.parse()?;
                let right: OptionRight = self.option_type.parse()?;
                OptionLeg::new(side, right, strike_or_entry, premium)
                    .map(Leg::Option)
                    .map_err(into_malformed)?
            }
            RecordType::Stock => {
                let side: StockSide = self.position.parse()?;
                if !self.option_type.is_empty() {
                    return Err(StrategyError::malformed(
                        0,
                        format!(
                            "stock row must have an empty option_type, got '{}'",
                            self.option_type
                        ),
                    ));
                }
                StockLeg::new(side, strike_or_entry)
                    .map(Leg::Stock)
                    .map_err(into_malformed)?
            }
        };

        Ok(leg)
    }
}

impl From<&Leg> for LegRecord {
    fn from(leg: &Leg) -> Self {
        match leg {
            Leg::Option(option) => Self {
                record_type: RecordType::Option.to_string(),
                position: option.side().to_string(),
                option_type: option.right().to_string(),
                strike_or_entry: format!("{:?}", option.strike()),
                premium: format!("{:?}", option.premium()),
            },
            Leg::Stock(stock) => Self {
                record_type: RecordType::Stock.to_string(),
                position: stock.side().to_string(),
                option_type: String::new(),
                strike_or_entry: format!("{:?}", stock.entry_price()),
                premium: "0".to_string(),
            },
        }
    }
}

impl TryFrom<&LegRecord> for Leg {
    type Error = StrategyError;

    fn try_from(record: &LegRecord) -> Result<Self, Self::Error> {
        record.to_leg()
    }
}

fn parse_real(column: &str, raw: &str) -> Result<f64, StrategyError> {
    raw.parse::<f64>().map_err(|_| {
        StrategyError::malformed(0, format!("{column} '{raw}' is not a real number"))
    })
}

fn into_malformed(err: StrategyError) -> StrategyError {
    match err {
        StrategyError::InvalidArgument { message } => StrategyError::malformed(0, message),
        other => other,
    }
}

//! Strategy Bounded Context
//!
//! This module handles the position being constructed, including:
//! - Option legs (long/short calls and puts) and stock legs (buy/sell)
//! - The `Payoff` capability shared by every leg
//! - The session-owned portfolio with options-then-stocks ordering
//! - Flat tabular records used for storage

pub mod errors;
pub mod value_objects;

pub use errors::StrategyError;
pub use value_objects::{
    Leg, LegRecord, OptionLeg, OptionRight, Payoff, Portfolio, PositionSide, RecordType,
    StockLeg, StockSide,
};

//! Strategy Value Objects

mod leg;
mod leg_record;
mod option_leg;
mod portfolio;
mod stock_leg;

pub use leg::{Leg, Payoff};
pub use leg_record::{LegRecord, RecordType};
pub use option_leg::{OptionLeg, OptionRight, PositionSide};
pub use portfolio::Portfolio;
pub use stock_leg::{StockLeg, StockSide};

//! Application Ports (Driven)
//!
//! Ports define how the session reaches storage without knowing its format
//! or location.

mod payoff_export_port;
mod strategy_store_port;

pub use payoff_export_port::PayoffExportPort;
pub use strategy_store_port::{StoreError, StrategyStorePort};

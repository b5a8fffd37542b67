//! Persistence Adapters
//!
//! CSV codecs for strategies and payoff exports, with file-backed and
//! in-memory implementations of the storage ports.

mod file;
mod in_memory;
mod payoff_csv;
mod strategy_csv;

pub use file::{CsvPayoffExporter, CsvStrategyStore};
pub use in_memory::{InMemoryPayoffExporter, InMemoryStrategyStore};
pub use payoff_csv::{EXPORT_HEADER, export_payoff_csv};
pub use strategy_csv::{STRATEGY_HEADER, deserialize_portfolio, serialize_portfolio};

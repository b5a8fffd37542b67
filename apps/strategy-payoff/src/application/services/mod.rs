//! Application Services

mod strategy_session;

pub use strategy_session::StrategySession;

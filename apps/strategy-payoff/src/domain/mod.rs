//! Domain Layer
//!
//! Pure position and payoff logic with no I/O.
//!
//! # Bounded Contexts
//!
//! - [`strategy`]: Option and stock legs, the owned portfolio, tabular records
//! - [`payoff`]: Price grid, per-leg and net payoff curves, curve summary

pub mod payoff;
pub mod strategy;

//! Application Layer
//!
//! Orchestrates the domain for a single user session:
//! - `ports`: storage and export interfaces implemented by infrastructure
//! - `services`: the session that owns the portfolio

pub mod ports;
pub mod services;

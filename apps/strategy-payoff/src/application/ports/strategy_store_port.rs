//! Strategy Store Port
//!
//! Persists a whole portfolio and reads it back.

use thiserror::Error;

use crate::domain::strategy::{Portfolio, StrategyError};

/// Errors from storage and export adapters.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read from the backing location.
    #[error("Failed to read '{location}': {source}")]
    Read {
        /// Where the read was attempted.
        location: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to write to the backing location.
    #[error("Failed to write '{location}': {source}")]
    Write {
        /// Where the write was attempted.
        location: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Nothing has been stored at the location yet.
    #[error("No strategy stored at '{location}'")]
    NotFound {
        /// The empty location.
        location: String,
    },

    /// Stored content could not be decoded.
    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

/// Storage for a complete portfolio.
pub trait StrategyStorePort {
    /// Human-readable location used in logs and errors.
    fn location(&self) -> String;

    /// Persist every leg of `portfolio`, replacing previous content.
    fn save(&self, portfolio: &Portfolio) -> Result<(), StoreError>;

    /// Read a complete portfolio. Fails without partial results.
    fn load(&self) -> Result<Portfolio, StoreError>;
}

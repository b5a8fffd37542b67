//! In-memory adapters for testing.

use std::sync::{PoisonError, RwLock};

use super::{deserialize_portfolio, export_payoff_csv, serialize_portfolio};
use crate::application::ports::{PayoffExportPort, StoreError, StrategyStorePort};
use crate::domain::payoff::PayoffCurve;
use crate::domain::strategy::Portfolio;

const LOCATION: &str = "memory";

/// In-memory strategy store holding the serialized CSV text.
///
/// Suitable for testing and development. Not for production use.
#[derive(Debug, Default)]
pub struct InMemoryStrategyStore {
    contents: RwLock<Option<String>>,
}

impl InMemoryStrategyStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with raw text (for test setup).
    #[must_use]
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: RwLock::new(Some(text.into())),
        }
    }

    /// Raw stored text, if anything was saved.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl StrategyStorePort for InMemoryStrategyStore {
    fn location(&self) -> String {
        LOCATION.to_string()
    }

    fn save(&self, portfolio: &Portfolio) -> Result<(), StoreError> {
        let mut contents = self
            .contents
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *contents = Some(serialize_portfolio(portfolio));
        Ok(())
    }

    fn load(&self) -> Result<Portfolio, StoreError> {
        let contents = self.contents.read().unwrap_or_else(PoisonError::into_inner);
        let text = contents.as_deref().ok_or_else(|| StoreError::NotFound {
            location: LOCATION.to_string(),
        })?;
        Ok(deserialize_portfolio(text)?)
    }
}

/// In-memory payoff exporter keeping the last export.
#[derive(Debug, Default)]
pub struct InMemoryPayoffExporter {
    contents: RwLock<Option<String>>,
}

impl InMemoryPayoffExporter {
    /// Create an exporter with nothing written.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the last export.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PayoffExportPort for InMemoryPayoffExporter {
    fn location(&self) -> String {
        LOCATION.to_string()
    }

    fn export(&self, curve: &PayoffCurve) -> Result<(), StoreError> {
        let mut contents = self
            .contents
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *contents = Some(export_payoff_csv(curve));
        Ok(())
    }
}

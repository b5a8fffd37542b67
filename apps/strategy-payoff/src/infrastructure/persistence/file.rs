//! File-backed CSV adapters.

use std::fs;
use std::path::{Path, PathBuf};

use super::{deserialize_portfolio, export_payoff_csv, serialize_portfolio};
use crate::application::ports::{PayoffExportPort, StoreError, StrategyStorePort};
use crate::domain::payoff::PayoffCurve;
use crate::domain::strategy::Portfolio;

/// Strategy storage in a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvStrategyStore {
    path: PathBuf,
}

impl CsvStrategyStore {
    /// Create a store for `path`. The file is not touched until used.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StrategyStorePort for CsvStrategyStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn save(&self, portfolio: &Portfolio) -> Result<(), StoreError> {
        fs::write(&self.path, serialize_portfolio(portfolio)).map_err(|source| {
            StoreError::Write {
                location: self.location(),
                source,
            }
        })
    }

    fn load(&self) -> Result<Portfolio, StoreError> {
        let text = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            location: self.location(),
            source,
        })?;
        Ok(deserialize_portfolio(&text)?)
    }
}

/// Payoff export to a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvPayoffExporter {
    path: PathBuf,
}

impl CsvPayoffExporter {
    /// Create an exporter writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the export file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PayoffExportPort for CsvPayoffExporter {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn export(&self, curve: &PayoffCurve) -> Result<(), StoreError> {
        fs::write(&self.path, export_payoff_csv(curve)).map_err(|source| StoreError::Write {
            location: self.location(),
            source,
        })
    }
}

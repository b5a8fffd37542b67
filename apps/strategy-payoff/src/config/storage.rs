//! Strategy and export file locations.

use serde::{Deserialize, Serialize};

/// File names used by the save/load and export commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Strategy file read on load and written on save.
    #[serde(default = "default_strategy_file")]
    pub strategy_file: String,
    /// Two-column payoff export file.
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            strategy_file: default_strategy_file(),
            export_file: default_export_file(),
        }
    }
}

fn default_strategy_file() -> String {
    "my_strategy.csv".to_string()
}

fn default_export_file() -> String {
    "payoff_data.csv".to_string()
}

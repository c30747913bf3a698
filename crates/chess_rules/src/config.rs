use serde::{Deserialize, Serialize};

use crate::error::{ChessError, ChessResult};

/// Formatting of the 64-entry board export handed to view layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Written for squares without a piece
    pub empty_marker: String,
    /// Placed between the team name and the piece letter
    pub separator: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            empty_marker: String::new(),
            separator: "-".to_string(),
        }
    }
}

impl ExportConfig {
    /// Preset used by text consoles, where blank squares need a visible dot.
    pub fn console() -> Self {
        Self {
            empty_marker: ".".to_string(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(text: &str) -> ChessResult<Self> {
        toml::from_str(text).map_err(|e| ChessError::InvalidConfig(e.to_string()))
    }

    pub fn to_toml_string(&self) -> ChessResult<String> {
        toml::to_string(self).map_err(|e| ChessError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

//! User settings for fintrack
//!
//! A small JSON settings file next to the data directory. Currently holds
//! the default user for CLI invocations and the display currency symbol.

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FintrackResult;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Username assumed when a command is run without `--user`
    #[serde(default)]
    pub default_user: Option<String>,

    /// Symbol used when formatting amounts for display
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_user: None,
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Settings {
    /// Load settings, creating the file with defaults on first run
    pub fn load_or_create(paths: &FintrackPaths) -> FintrackResult<Self> {
        let path = paths.settings_file();
        if !path.exists() {
            let settings = Self::default();
            settings.save(paths)?;
            return Ok(settings);
        }
        read_json(&path)
    }

    /// Persist settings
    pub fn save(&self, paths: &FintrackPaths) -> FintrackResult<()> {
        write_json_atomic(paths.settings_file(), self)
    }
}

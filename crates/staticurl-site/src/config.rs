//! Project configuration (`config.json`).

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Default output directory.
pub const DEFAULT_OUTPUT: &str = "public";

/// Default input directory.
pub const DEFAULT_URLDIR: &str = "urls";

/// Configuration file structure.
///
/// Missing fields deserialize to empty strings and are passed through as-is;
/// the defaults only apply when the whole file fails to load.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Output directory, relative to the project root
    #[serde(default)]
    pub output: String,

    /// Directory holding one file per short code, relative to the project root
    #[serde(default)]
    pub urldir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: DEFAULT_OUTPUT.to_string(),
            urldir: DEFAULT_URLDIR.to_string(),
        }
    }
}

impl Config {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read(path).map_err(ConfigError::Read)?;
        serde_json::from_slice(&content).map_err(ConfigError::Parse)
    }

    /// Read a config file, falling back to the defaults if it is missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{} ({}), using default directories", e, path.display());
                Self::default()
            }
        }
    }
}

/// Errors that can occur when loading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file cannot be read: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[source] serde_json::Error),
}

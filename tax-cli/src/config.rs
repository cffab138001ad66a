//! Application configuration.
//!
//! Loaded from an optional TOML file; every key has a default so an empty
//! or missing file is valid.
//!
//! ```toml
//! [store]
//! backend = "json"
//! location = "data/finance.json"
//!
//! [logging]
//! level = "info"
//! file = "tax-estimator.log"
//!
//! [defaults]
//! filing_status = "single"
//! state = "WA"
//! frequency = "monthly"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tax_core::db::StoreConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub logging: LoggingConfig,
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Any `EnvFilter` directive. `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Append log output to this file in addition to stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Values used when a command omits the corresponding flag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub filing_status: String,
    pub state: String,
    pub frequency: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            filing_status: "single".to_string(),
            state: "WA".to_string(),
            frequency: "monthly".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(
        contents: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }
}

//! Configuration for prefix.
//!
//! The only tunable is the loose-equality [`CoercionPolicy`]. It is read from
//! `~/.prefix/config.toml`:
//!
//! ```toml
//! [equality]
//! number_text = true
//! bool_to_number = false
//! ```
//!
//! Missing keys and a missing `[equality]` table fall back to the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use prefix_types::CoercionPolicy;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PrefixConfig {
    pub equality: CoercionPolicy,
}

impl PrefixConfig {
    /// Load the user config, if there is a readable and valid one.
    ///
    /// Read and parse failures are logged and treated as "no config".
    #[must_use]
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }

        match Self::load_from(&path) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("{err}");
                None
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn coercion_policy(&self) -> CoercionPolicy {
        self.equality
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".prefix").join("config.toml"))
}

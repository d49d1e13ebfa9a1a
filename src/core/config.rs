//! Configuration file management.
//!
//! An optional `config.toml` supplies default key and credential file paths.
//! It lives at `$SITEPASS_CONFIG`, or `<config dir>/sitepass/config.toml`.
//! A missing file is the same as an empty one.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// User configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: Paths,
}

/// Default file locations.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paths {
    /// Key file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<PathBuf>,
    /// Credential file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<PathBuf>,
}

impl Config {
    /// Location of the config file.
    ///
    /// `$SITEPASS_CONFIG` wins; otherwise the platform config directory. Returns
    /// `None` when neither is available.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(constants::CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(constants::APP_DIR).join(constants::CONFIG_FILE))
    }

    /// Load from the default location.
    ///
    /// # Errors
    ///
    /// See [`load_from`](Self::load_from).
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`. A missing file yields the default config.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file exists but cannot be read, or
    /// `ConfigError::Parse` if the TOML is malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on malformed input.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Resolve the key file: explicit value, else config, with `~/` expanded.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingPath` if neither is set.
    pub fn key_path(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        resolve(explicit, self.paths.key.as_deref(), "key")
    }

    /// Resolve the credential file: explicit value, else config, with `~/` expanded.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingPath` if neither is set.
    pub fn store_path(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        resolve(explicit, self.paths.store.as_deref(), "file")
    }
}

fn resolve(explicit: Option<&Path>, configured: Option<&Path>, what: &'static str) -> Result<PathBuf> {
    explicit
        .or(configured)
        .map(expand_home)
        .ok_or_else(|| ConfigError::MissingPath(what).into())
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

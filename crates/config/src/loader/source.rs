//! Configuration source builder.
//!
//! Responsibilities:
//! - Resolve the effective config file path from an explicit argument, the
//!   `CONFIG_PATH` environment variable, and a default location.
//! - Read and parse the resolved file exactly once.
//!
//! Does NOT handle:
//! - Section or key lookups (see `reader.rs`).
//!
//! Invariants / Assumptions:
//! - Precedence: explicit path > environment path > default path.
//! - Blank values at any level are ignored so the next level applies.
//! - The environment is only read by `from_env()`, never implicitly.

use std::io::ErrorKind;
use std::path::PathBuf;

use super::document::Document;
use super::env::{env_var_or_none, non_blank};
use super::error::ConfigError;
use super::reader::ConfigReader;
use crate::constants::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};

/// Builder that locates and loads the configuration file.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    config_path: Option<PathBuf>,
    env_path: Option<String>,
    default_path: PathBuf,
}

impl Default for ConfigSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource {
    /// Create a source that resolves to the built-in default path.
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_path: None,
            default_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Set an explicit config path (highest priority).
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        if non_blank(&path.to_string_lossy()).is_some() {
            self.config_path = Some(path);
        }
        self
    }

    /// Set a path that is used exactly as given, even when blank.
    pub(crate) fn with_exact_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Set the environment-provided path without reading the environment.
    pub fn with_env_path(mut self, path: Option<String>) -> Self {
        self.env_path = path.as_deref().and_then(non_blank);
        self
    }

    /// Read `CONFIG_PATH` from the process environment.
    pub fn from_env(self) -> Self {
        let path = env_var_or_none(CONFIG_PATH_ENV);
        self.with_env_path(path)
    }

    /// Replace the fallback used when neither an explicit nor an environment path is set.
    pub fn with_default_path(mut self, path: PathBuf) -> Self {
        self.default_path = path;
        self
    }

    /// Returns the path that `load()` would read.
    pub fn resolve_path(&self) -> PathBuf {
        if let Some(path) = &self.config_path {
            return path.clone();
        }
        if let Some(path) = &self.env_path {
            return PathBuf::from(path);
        }
        self.default_path.clone()
    }

    /// Resolve the path, then read and parse the file.
    pub fn load(self) -> Result<ConfigReader, ConfigError> {
        let path = self.resolve_path();
        tracing::debug!(path = %path.display(), "Loading configuration file");

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ConfigError::NotFound { path });
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let document = Document::parse(&text).map_err(|message| ConfigError::Parse {
            path: path.clone(),
            message,
        })?;
        tracing::debug!(
            path = %path.display(),
            sections = document.len(),
            "Configuration file loaded"
        );

        Ok(ConfigReader::new(Some(path), document))
    }
}

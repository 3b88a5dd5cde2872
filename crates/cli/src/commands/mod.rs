//! Command implementations.
//!
//! Responsibilities:
//! - Load the configuration file for commands that need one.
//! - Run each subcommand and print its formatted output to stdout.
//!
//! Does NOT handle:
//! - Argument parsing (see `args`) or exit code mapping (see `error`).

pub mod check;
pub mod lookup;
pub mod schema;
pub mod validate;

use anyhow::{Context, Result};
use kesl_config::{ConfigReader, ConfigSource};
use std::path::PathBuf;

/// Load the configuration using `--config-path`, then `CONFIG_PATH`, then the default.
pub fn load_config(config_path: Option<PathBuf>) -> Result<ConfigReader> {
    let mut source = ConfigSource::new().from_env();
    if let Some(path) = config_path {
        source = source.with_config_path(path);
    }
    let path = source.resolve_path();
    source
        .load()
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

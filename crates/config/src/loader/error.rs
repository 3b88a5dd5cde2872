//! Error types for configuration loading and lookup.
//!
//! Responsibilities:
//! - Define error variants for every structural failure of the accessor.
//! - Keep "file missing", "section missing" and "key missing" distinguishable.
//!
//! Does NOT handle:
//! - Invalid values. Validators report those as `false`, never as errors.
//!
//! Invariants:
//! - All error variants include context for diagnostics (paths, section and key names).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or reading the configuration document.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file at {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Raised by section lookups.
    #[error("Section '{0}' not found in config")]
    SectionNotFound(String),

    /// Raised by value lookups when the enclosing section is absent.
    #[error("Section '{0}' missing")]
    SectionMissing(String),

    #[error("Key '{key}' missing in section '{section}'")]
    KeyMissing { section: String, key: String },
}

impl ConfigError {
    /// Returns true for lookups of a section or key that the document lacks.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            ConfigError::SectionNotFound(_)
                | ConfigError::SectionMissing(_)
                | ConfigError::KeyMissing { .. }
        )
    }
}

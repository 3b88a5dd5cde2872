//! Section and key accessor over a loaded document.
//!
//! Responsibilities:
//! - Expose section and value lookups with typed failures.
//!
//! Does NOT handle:
//! - Judging whether a value is acceptable (see `validators`).
//!
//! Invariants:
//! - The document is never mutated after construction.
//! - Absent sections and keys are errors, never empty defaults.

use std::path::{Path, PathBuf};

use super::document::{Document, Section};
use super::error::ConfigError;
use super::source::ConfigSource;

/// Read-only view of a loaded configuration file.
#[derive(Debug, Clone)]
pub struct ConfigReader {
    path: Option<PathBuf>,
    document: Document,
}

impl ConfigReader {
    pub(crate) fn new(path: Option<PathBuf>, document: Document) -> Self {
        Self { path, document }
    }

    /// Load the configuration using the standard precedence:
    /// `path` if given, else `CONFIG_PATH`, else the default location.
    pub fn open(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut source = ConfigSource::new().from_env();
        if let Some(path) = path {
            source = source.with_config_path(path);
        }
        source.load()
    }

    /// Load exactly `path`, ignoring the environment and the default location.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        ConfigSource::new().with_exact_path(path.into()).load()
    }

    /// Build a reader from INI text already held in memory.
    pub fn parse_str(text: &str) -> Result<Self, ConfigError> {
        let document = Document::parse(text).map_err(|message| ConfigError::Parse {
            path: PathBuf::from("<memory>"),
            message,
        })?;
        Ok(Self::new(None, document))
    }

    /// Path the document was loaded from, if it came from disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.document.section_names()
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.document.section(name).is_some()
    }

    /// Returns every key/value pair of section `name`.
    pub fn get_section(&self, name: &str) -> Result<&Section, ConfigError> {
        self.document
            .section(name)
            .ok_or_else(|| ConfigError::SectionNotFound(name.to_string()))
    }

    /// Returns the raw value of `key` in `section`.
    pub fn get_value(&self, section: &str, key: &str) -> Result<&str, ConfigError> {
        let entries = self
            .document
            .section(section)
            .ok_or_else(|| ConfigError::SectionMissing(section.to_string()))?;
        entries.get(key).ok_or_else(|| ConfigError::KeyMissing {
            section: section.to_string(),
            key: key.to_string(),
        })
    }
}

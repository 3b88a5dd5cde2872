//! Schema validation reports.

use serde::Serialize;

use super::KeySpec;
use crate::loader::{ConfigError, ConfigReader};

/// Result of checking one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Valid { value: String },
    Invalid { value: String },
    MissingKey,
    MissingSection,
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid { .. })
    }

    /// The raw value, when the key was present.
    pub fn value(&self) -> Option<&str> {
        match self {
            Outcome::Valid { value } | Outcome::Invalid { value } => Some(value),
            Outcome::MissingKey | Outcome::MissingSection => None,
        }
    }
}

/// One checked key together with its rule and outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    #[serde(flatten)]
    pub spec: KeySpec,
    pub expected: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Outcome of checking a document against a schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub entries: Vec<ReportEntry>,
}

impl ValidationReport {
    /// True when every checked key is present and valid.
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|entry| entry.outcome.is_valid())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|entry| !entry.outcome.is_valid())
    }

    pub fn valid_count(&self) -> usize {
        self.entries.len() - self.failure_count()
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}

/// Checks every spec against `reader`, recording missing sections and keys
/// instead of stopping at the first one.
pub fn validate(reader: &ConfigReader, schema: &[KeySpec]) -> ValidationReport {
    let entries = schema
        .iter()
        .map(|spec| {
            let outcome = match reader.get_value(spec.section, spec.key) {
                Ok(value) if spec.rule.check(value) => Outcome::Valid {
                    value: value.to_string(),
                },
                Ok(value) => {
                    tracing::warn!(
                        section = spec.section,
                        key = spec.key,
                        value,
                        expected = %spec.rule,
                        "Invalid configuration value"
                    );
                    Outcome::Invalid {
                        value: value.to_string(),
                    }
                }
                Err(ConfigError::SectionMissing(_)) => Outcome::MissingSection,
                Err(_) => Outcome::MissingKey,
            };
            ReportEntry {
                spec: *spec,
                expected: spec.rule.to_string(),
                outcome,
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        checked = entries.len(),
        failed = entries.iter().filter(|e| !e.outcome.is_valid()).count(),
        "Schema validation finished"
    );
    ValidationReport { entries }
}

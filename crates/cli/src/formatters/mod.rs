//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide table and JSON renderings of reports, sections, values and the schema.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - JSON output is always a single valid document, even when empty.
//! - Table output ends without a trailing newline; the caller adds one.

use anyhow::Result;
use clap::ValueEnum;
use kesl_config::{KeySpec, Section, ValidationReport};
use serde::Serialize;

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Result of running a single validator from the command line.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub rule: String,
    pub value: String,
    pub expected: String,
    pub valid: bool,
}

/// Trait for formatting command output.
pub trait Formatter {
    /// Format a schema validation report.
    fn format_report(&self, report: &ValidationReport) -> Result<String>;

    /// Format every entry of one section.
    fn format_section(&self, name: &str, section: &Section) -> Result<String>;

    /// Format a single raw value.
    fn format_value(&self, section: &str, key: &str, value: &str) -> Result<String>;

    /// Format the list of known keys.
    fn format_schema(&self, schema: &[KeySpec]) -> Result<String>;

    /// Format the outcome of an ad hoc validation.
    fn format_verdict(&self, verdict: &Verdict) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

//! JSON formatter implementation.

use anyhow::Result;
use kesl_config::{KeySpec, Section, ValidationReport};
use serde_json::json;

use crate::formatters::{Formatter, Verdict};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_report(&self, report: &ValidationReport) -> Result<String> {
        let output = json!({
            "valid": report.is_valid(),
            "checked": report.entries.len(),
            "failed": report.failure_count(),
            "entries": report.entries,
        });
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_section(&self, name: &str, section: &Section) -> Result<String> {
        let output = json!({
            "section": name,
            "entries": section,
        });
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_value(&self, section: &str, key: &str, value: &str) -> Result<String> {
        let output = json!({
            "section": section,
            "key": key,
            "value": value,
        });
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_schema(&self, schema: &[KeySpec]) -> Result<String> {
        Ok(serde_json::to_string_pretty(schema)?)
    }

    fn format_verdict(&self, verdict: &Verdict) -> Result<String> {
        Ok(serde_json::to_string_pretty(verdict)?)
    }
}

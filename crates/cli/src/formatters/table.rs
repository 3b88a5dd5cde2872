//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format reports, sections and the schema as aligned text tables.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use kesl_config::{KeySpec, Outcome, Section, ValidationReport};

use crate::formatters::{Formatter, Verdict};

/// Table formatter.
pub struct TableFormatter;

fn outcome_label(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Valid { .. } => "OK",
        Outcome::Invalid { .. } => "INVALID",
        Outcome::MissingKey => "MISSING",
        Outcome::MissingSection => "NO SECTION",
    }
}

impl Formatter for TableFormatter {
    fn format_report(&self, report: &ValidationReport) -> Result<String> {
        if report.entries.is_empty() {
            return Ok("No keys to check.".to_string());
        }

        let mut output = format!(
            "{:<10} {:<30} {:<12} {:<40} {}\n",
            "Section", "Key", "Status", "Value", "Expected"
        );
        output.push_str(&format!("{}\n", "-".repeat(120)));

        for entry in &report.entries {
            output.push_str(&format!(
                "{:<10} {:<30} {:<12} {:<40} {}\n",
                entry.spec.section,
                entry.spec.key,
                outcome_label(&entry.outcome),
                entry.outcome.value().unwrap_or("-"),
                entry.expected
            ));
        }

        output.push_str(&format!(
            "\n{} checked, {} valid, {} failed",
            report.entries.len(),
            report.valid_count(),
            report.failure_count()
        ));
        Ok(output)
    }

    fn format_section(&self, name: &str, section: &Section) -> Result<String> {
        let mut output = format!("[{}]", name);
        if section.is_empty() {
            output.push_str("\n(no entries)");
            return Ok(output);
        }
        for (key, value) in section.iter() {
            output.push_str(&format!("\n{:<30} {}", key, value));
        }
        Ok(output)
    }

    fn format_value(&self, _section: &str, _key: &str, value: &str) -> Result<String> {
        Ok(value.to_string())
    }

    fn format_schema(&self, schema: &[KeySpec]) -> Result<String> {
        let mut output = format!("{:<10} {:<30} {}\n", "Section", "Key", "Expected");
        output.push_str(&format!("{}", "-".repeat(80)));
        for spec in schema {
            output.push_str(&format!(
                "\n{:<10} {:<30} {}",
                spec.section, spec.key, spec.rule
            ));
        }
        Ok(output)
    }

    fn format_verdict(&self, verdict: &Verdict) -> Result<String> {
        if verdict.valid {
            Ok("valid".to_string())
        } else {
            Ok(format!("invalid (expected {})", verdict.expected))
        }
    }
}

//! Check command: validate the file against the built-in schema.

use anyhow::Result;
use kesl_config::{
    ConfigReader,
    schema::{self, KESL_SCHEMA, KeySpec, section_specs},
};
use tracing::info;

use crate::error::CliError;
use crate::formatters::{OutputFormat, get_formatter};

/// Run the check command.
///
/// Prints the full report, then fails with `CliError::ValidationFailed`
/// when any key is invalid or missing.
pub fn run(reader: &ConfigReader, section: Option<&str>, output_format: OutputFormat) -> Result<()> {
    let specs: Vec<KeySpec> = match section {
        Some(name) => {
            let specs: Vec<KeySpec> = section_specs(KESL_SCHEMA, name).copied().collect();
            if specs.is_empty() {
                anyhow::bail!("Section '{}' has no known keys", name);
            }
            specs
        }
        None => KESL_SCHEMA.to_vec(),
    };

    info!(keys = specs.len(), "Checking configuration");
    let report = schema::validate(reader, &specs);

    let formatter = get_formatter(output_format);
    println!("{}", formatter.format_report(&report)?);

    if report.is_valid() {
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            failed: report.failure_count(),
            checked: report.entries.len(),
        }
        .into())
    }
}

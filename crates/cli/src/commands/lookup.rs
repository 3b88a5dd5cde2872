//! Get and section commands: print raw values from the file.

use anyhow::{Context, Result};
use kesl_config::ConfigReader;

use crate::formatters::{OutputFormat, get_formatter};

/// Print the raw value of `key` in `section`.
pub fn run_get(
    reader: &ConfigReader,
    section: &str,
    key: &str,
    output_format: OutputFormat,
) -> Result<()> {
    let value = reader
        .get_value(section, key)
        .with_context(|| format!("Failed to read {}/{}", section, key))?;

    let formatter = get_formatter(output_format);
    println!("{}", formatter.format_value(section, key, value)?);
    Ok(())
}

/// Print every entry of section `name`.
pub fn run_section(reader: &ConfigReader, name: &str, output_format: OutputFormat) -> Result<()> {
    let section = reader
        .get_section(name)
        .with_context(|| format!("Failed to read section {}", name))?;

    let formatter = get_formatter(output_format);
    println!("{}", formatter.format_section(name, section)?);
    Ok(())
}

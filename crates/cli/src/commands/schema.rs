//! Schema command: list the built-in keys and their rules.

use anyhow::Result;
use kesl_config::KESL_SCHEMA;

use crate::formatters::{OutputFormat, get_formatter};

pub fn run(output_format: OutputFormat) -> Result<()> {
    let formatter = get_formatter(output_format);
    println!("{}", formatter.format_schema(KESL_SCHEMA)?);
    Ok(())
}

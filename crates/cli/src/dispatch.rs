//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Load the configuration file only for commands that read it.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//!
//! Invariants:
//! - `validate` and `schema` never touch the filesystem config.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check { section } => {
            let reader = commands::load_config(cli.config_path)?;
            commands::check::run(&reader, section.as_deref(), cli.output)?;
        }
        Commands::Get { section, key } => {
            let reader = commands::load_config(cli.config_path)?;
            commands::lookup::run_get(&reader, &section, &key, cli.output)?;
        }
        Commands::Section { name } => {
            let reader = commands::load_config(cli.config_path)?;
            commands::lookup::run_section(&reader, &name, cli.output)?;
        }
        Commands::Validate {
            rule,
            value,
            min,
            max,
        } => {
            commands::validate::run(rule, &value, min.as_deref(), max.as_deref(), cli.output)?;
        }
        Commands::Schema => {
            commands::schema::run(cli.output)?;
        }
    }
    Ok(())
}

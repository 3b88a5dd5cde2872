//! kesl-config - Command-line inspection and validation of the agent configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the INI configuration and run lookups or schema checks on it.
//! - Format and display results as tables or JSON.
//!
//! Does NOT handle:
//! - Parsing or validation rules (see `crates/config`).
//! - Applying configuration to a running agent.
//!
//! Invariants:
//! - Logs go to stderr; stdout carries only command output.
//! - The process exit code is derived from the error chain (see `error`).

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

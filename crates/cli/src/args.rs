//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load the config file (see `commands`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::formatters::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "kesl-config")]
#[command(about = "Inspect and validate the agent configuration file", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  kesl-config check\n  kesl-config --config-path ./config.ini check --section Watchdog\n  kesl-config get General ScanMemoryLimit\n  kesl-config -o json section Watchdog\n  kesl-config validate minutes 20m --min 1 --max 120\n"
)]
pub struct Cli {
    /// Path to the configuration file (overrides the default location).
    ///
    /// Can also be set via the CONFIG_PATH environment variable.
    #[arg(long, global = true, env = "CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate every known key of the configuration file
    Check {
        /// Only check keys of this section
        #[arg(long)]
        section: Option<String>,
    },

    /// Print the raw value of one key
    Get {
        /// Section name (case-sensitive)
        section: String,
        /// Key name (case-insensitive)
        key: String,
    },

    /// Print every key/value pair of a section
    Section {
        /// Section name (case-sensitive)
        name: String,
    },

    /// Run one validator against a value without reading the config file
    Validate {
        /// Validator to apply
        #[arg(value_enum)]
        rule: RuleKind,

        /// Value to check
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Lower bound for range rules
        #[arg(long, allow_hyphen_values = true)]
        min: Option<String>,

        /// Upper bound for range rules
        #[arg(long, allow_hyphen_values = true)]
        max: Option<String>,
    },

    /// List the built-in schema of known keys
    Schema,
}

/// Validator names accepted by the `validate` subcommand.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleKind {
    /// Integer within [min, max]
    Int,
    /// Number within (min, max]
    Float,
    /// true, false, yes or no
    Bool,
    /// rpm or deb
    PackageType,
    /// Absolute path to an existing directory
    Dir,
    /// Hyphenated UUID
    Uuid,
    /// Locale such as en_US.UTF-8
    Locale,
    /// Minutes with an 'm' suffix within [min, max]
    Minutes,
    /// off, auto, or a number within (0, 100]
    Memory,
}

impl RuleKind {
    pub fn needs_bounds(self) -> bool {
        matches!(self, RuleKind::Int | RuleKind::Float | RuleKind::Minutes)
    }
}

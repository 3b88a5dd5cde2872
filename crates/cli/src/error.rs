//! CLI exit codes and command errors.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` and `CliError` variants to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - A configuration that loads but fails validation always exits with 5.
//! - Missing files, sections and keys always exit with 4.

use kesl_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for kesl-config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed and every checked value is valid.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Usage error - arguments are inconsistent (e.g. a range rule without bounds).
    UsageError = 2,

    /// Not found - config file, section or key is absent.
    NotFound = 4,

    /// Validation error - one or more values violate their constraint.
    ValidationError = 5,

    /// Unreadable config - the file exists but cannot be read or parsed.
    ConfigUnreadable = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Failures raised by the commands themselves.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{failed} of {checked} configuration values failed validation")]
    ValidationFailed { failed: usize, checked: usize },

    #[error("'{value}' is not a valid {expected}")]
    InvalidValue { value: String, expected: String },

    #[error("the {rule} rule requires both --min and --max")]
    MissingBounds { rule: String },

    #[error("invalid bound '{value}': {message}")]
    InvalidBound { value: String, message: String },
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        if err.is_lookup_failure() {
            return ExitCode::NotFound;
        }
        match err {
            ConfigError::Read { .. } | ConfigError::Parse { .. } => ExitCode::ConfigUnreadable,
            _ => ExitCode::NotFound,
        }
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::ValidationFailed { .. } | CliError::InvalidValue { .. } => {
                ExitCode::ValidationError
            }
            CliError::MissingBounds { .. } | CliError::InvalidBound { .. } => ExitCode::UsageError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(err);
            }
        }
        ExitCode::GeneralError
    }
}

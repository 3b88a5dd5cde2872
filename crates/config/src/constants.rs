//! Centralized constants for the kesl-config workspace.
//!
//! This module contains default values and accepted vocabularies used across
//! crates to avoid magic string duplication.

// =============================================================================
// Config File Location
// =============================================================================

/// Environment variable consulted when no explicit config path is given.
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Default location of the agent configuration file.
///
/// Packagers can relocate it by setting `KESL_DEFAULT_CONFIG_PATH` at build time.
pub const DEFAULT_CONFIG_PATH: &str = match option_env!("KESL_DEFAULT_CONFIG_PATH") {
    Some(path) => path,
    None => "/var/opt/kaspersky/config.ini",
};

/// Section whose keys are inherited by every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

// =============================================================================
// Accepted Vocabularies
// =============================================================================

/// Words accepted by the boolean validator (compared after lower-casing).
pub const BOOLEAN_WORDS: [&str; 4] = ["true", "false", "yes", "no"];

/// Package formats accepted by the package-type validator.
pub const PACKAGE_TYPES: [&str; 2] = ["rpm", "deb"];

/// Sentinel words accepted outright by the memory-value validator.
pub const MEMORY_SENTINELS: [&str; 2] = ["off", "auto"];

/// Suffix required by minute-denominated timeouts.
pub const MINUTES_SUFFIX: char = 'm';

// =============================================================================
// Memory Value Bounds
// =============================================================================

/// Exclusive lower bound for numeric memory percentages.
pub const MEMORY_PERCENT_MIN: f64 = 0.0;

/// Inclusive upper bound for numeric memory percentages.
pub const MEMORY_PERCENT_MAX: f64 = 100.0;

//! Constraint descriptions that dispatch to the validators.

use std::fmt;

use serde::Serialize;

use crate::validators;

/// A constraint on a single configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// Integer within `min..=max`.
    IntRange { min: i64, max: i64 },
    /// Number within `(min, max]`.
    FloatRange { min: f64, max: f64 },
    Boolean,
    PackageType,
    ExistingDirectory,
    Uuid,
    Locale,
    /// Whole minutes with an `m` suffix, within `min..=max`.
    Minutes { min: i64, max: i64 },
    /// `off`, `auto`, or a percentage in `(0, 100]`.
    Memory,
}

impl Rule {
    /// Returns true if `value` satisfies this rule.
    pub fn check(&self, value: &str) -> bool {
        match *self {
            Rule::IntRange { min, max } => validators::is_int_in_range(value, min, max),
            Rule::FloatRange { min, max } => validators::is_float_in_range(value, min, max),
            Rule::Boolean => validators::is_boolean(value),
            Rule::PackageType => validators::is_valid_package_type(value),
            Rule::ExistingDirectory => validators::is_existing_directory(value),
            Rule::Uuid => validators::is_valid_uuid(value),
            Rule::Locale => validators::is_valid_locale(value),
            Rule::Minutes { min, max } => validators::is_valid_timeout_with_m(value, min, max),
            Rule::Memory => validators::is_valid_memory_value(value),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::IntRange { min, max } => write!(f, "integer in [{min}, {max}]"),
            Rule::FloatRange { min, max } => write!(f, "number in ({min}, {max}]"),
            Rule::Boolean => f.write_str("true, false, yes or no"),
            Rule::PackageType => f.write_str("rpm or deb"),
            Rule::ExistingDirectory => f.write_str("absolute path to an existing directory"),
            Rule::Uuid => f.write_str("UUID (xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx)"),
            Rule::Locale => f.write_str("locale such as en_US.UTF-8"),
            Rule::Minutes { min, max } => write!(f, "minutes in [{min}, {max}] with 'm' suffix"),
            Rule::Memory => f.write_str("number in (0, 100], \"off\" or \"auto\""),
        }
    }
}

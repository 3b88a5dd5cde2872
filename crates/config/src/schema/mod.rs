//! Declarative description of the agent's standard configuration keys.
//!
//! Responsibilities:
//! - Pair each known (section, key) with the rule its value must satisfy.
//! - Check a loaded document against a list of such pairs in one pass.
//!
//! Does NOT handle:
//! - Loading files (see `loader`).
//! - Implementing constraints; every rule calls the public validators.
//!
//! Invariants:
//! - Missing sections and keys are reported per entry, not raised.
//! - Key matching is case-insensitive, as in the loader.

mod report;
mod rule;

use serde::Serialize;

pub use report::{Outcome, ReportEntry, ValidationReport, validate};
pub use rule::Rule;

/// The rule for one key of one section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeySpec {
    pub section: &'static str,
    pub key: &'static str,
    pub rule: Rule,
}

const fn spec(section: &'static str, key: &'static str, rule: Rule) -> KeySpec {
    KeySpec { section, key, rule }
}

/// Standard keys of the agent configuration file.
pub const KESL_SCHEMA: &[KeySpec] = &[
    spec("General", "ScanMemoryLimit", Rule::IntRange { min: 1024, max: 8192 }),
    spec("General", "PackageType", Rule::PackageType),
    spec("General", "ExecArgMax", Rule::IntRange { min: 10, max: 100 }),
    spec("General", "AdditionalDNSLookup", Rule::Boolean),
    spec("General", "CoreDumps", Rule::Boolean),
    spec("General", "RevealSensitiveInfoInTraces", Rule::Boolean),
    spec("General", "ExecEnvMax", Rule::IntRange { min: 10, max: 100 }),
    spec("General", "MaxInotifyWatches", Rule::IntRange { min: 1000, max: 1_000_000 }),
    spec("General", "CoreDumpsPath", Rule::ExistingDirectory),
    spec("General", "UseFanotify", Rule::Boolean),
    spec("General", "KsvlaMode", Rule::Boolean),
    spec("General", "MachineId", Rule::Uuid),
    spec("General", "StartupTraces", Rule::Boolean),
    spec("General", "MaxInotifyInstances", Rule::IntRange { min: 1024, max: 8192 }),
    spec("General", "Locale", Rule::Locale),
    spec("Watchdog", "ConnectTimeout", Rule::Minutes { min: 1, max: 120 }),
    spec("Watchdog", "MaxVirtualMemory", Rule::Memory),
    spec("Watchdog", "MaxMemory", Rule::Memory),
    spec("Watchdog", "PingInterval", Rule::IntRange { min: 100, max: 10000 }),
];

/// Finds the spec for `key` in `section` (key compared case-insensitively).
pub fn find_spec<'a>(schema: &'a [KeySpec], section: &str, key: &str) -> Option<&'a KeySpec> {
    schema
        .iter()
        .find(|spec| spec.section == section && spec.key.eq_ignore_ascii_case(key))
}

/// Specs belonging to `section`, in schema order.
pub fn section_specs<'a>(
    schema: &'a [KeySpec],
    section: &'a str,
) -> impl Iterator<Item = &'a KeySpec> + 'a {
    schema.iter().filter(move |spec| spec.section == section)
}

//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test path resolution precedence and environment handling.
//! - Test section and key lookups and their typed failures.
//! - Test the agent configuration scenarios end to end (loader + validators).
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub mod source_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Writes `content` to `config.ini` inside `dir` and returns its path.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.ini");
    std::fs::write(&path, content).unwrap();
    path
}

/// Renders the reference agent configuration with selected values replaced.
pub fn base_config(overrides: &[(&str, &str)]) -> String {
    let mut general: BTreeMap<&str, String> = [
        ("ScanMemoryLimit", "8192"),
        ("PackageType", "rpm"),
        ("ExecArgMax", "50"),
        ("AdditionalDNSLookup", "true"),
        ("CoreDumps", "no"),
        ("RevealSensitiveInfoInTraces", "yes"),
        ("ExecEnvMax", "50"),
        ("MaxInotifyWatches", "300000"),
        ("CoreDumpsPath", "/tmp"),
        ("UseFanotify", "false"),
        ("KsvlaMode", "yes"),
        ("MachineId", "7b5cc0e7-0205-48e1-bf63-347531eef193"),
        ("StartupTraces", "no"),
        ("MaxInotifyInstances", "2048"),
        ("Locale", "en_US.UTF-8"),
    ]
    .into_iter()
    .map(|(k, v)| (k, v.to_string()))
    .collect();
    let mut watchdog: BTreeMap<&str, String> = [
        ("ConnectTimeout", "20m"),
        ("MaxVirtualMemory", "auto"),
        ("MaxMemory", "70.5"),
        ("PingInterval", "3000"),
    ]
    .into_iter()
    .map(|(k, v)| (k, v.to_string()))
    .collect();

    for (key, value) in overrides {
        if let Some(slot) = general.get_mut(key) {
            *slot = value.to_string();
        } else if let Some(slot) = watchdog.get_mut(key) {
            *slot = value.to_string();
        } else {
            panic!("unknown reference key {key}");
        }
    }

    let mut text = String::from("[General]\n");
    for (key, value) in &general {
        text.push_str(&format!("{key}={value}\n"));
    }
    text.push_str("\n[Watchdog]\n");
    for (key, value) in &watchdog {
        text.push_str(&format!("{key}={value}\n"));
    }
    text
}

//! Shared test utilities for kesl-config integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that ignores the host environment.
//! - Write reference configuration files into temporary directories.
//!
//! Invariants / Assumptions:
//! - `CONFIG_PATH` and `RUST_LOG` are always cleared unless a test sets them.

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Returns a hermetic `kesl-config` command for integration testing.
pub fn kesl_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("kesl-config");
    cmd.env_remove("CONFIG_PATH").env_remove("RUST_LOG");
    cmd
}

/// Writes the reference agent configuration into `dir` and returns its path.
///
/// `CoreDumpsPath` points at `dir` itself so the directory check passes.
#[allow(dead_code)]
pub fn write_reference_config(dir: &Path) -> PathBuf {
    write_config_with(dir, &[])
}

/// Writes the reference configuration with `replacements` applied as
/// plain `(from, to)` text substitutions.
#[allow(dead_code)]
pub fn write_config_with(dir: &Path, replacements: &[(&str, &str)]) -> PathBuf {
    let mut text = format!(
        "[General]
ScanMemoryLimit=8192
PackageType=rpm
ExecArgMax=50
AdditionalDNSLookup=true
CoreDumps=no
RevealSensitiveInfoInTraces=yes
ExecEnvMax=50
MaxInotifyWatches=300000
CoreDumpsPath={}
UseFanotify=false
KsvlaMode=yes
MachineId=7b5cc0e7-0205-48e1-bf63-347531eef193
StartupTraces=no
MaxInotifyInstances=2048
Locale=en_US.UTF-8

[Watchdog]
ConnectTimeout=20m
MaxVirtualMemory=auto
MaxMemory=70.5
PingInterval=3000
",
        dir.display()
    );
    for (from, to) in replacements {
        text = text.replace(from, to);
    }

    let path = dir.join("config.ini");
    std::fs::write(&path, text).unwrap();
    path
}

//! Path resolution tests for `ConfigSource` and `ConfigReader::open`.
//!
//! Responsibilities:
//! - Test explicit > CONFIG_PATH > default precedence.
//! - Test handling of empty and whitespace-only paths.
//! - Test that a missing resolved file fails before any lookup.

use crate::constants::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use crate::loader::error::ConfigError;
use crate::loader::reader::ConfigReader;
use crate::loader::source::ConfigSource;
use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;

use super::{base_config, env_lock, write_config};

#[test]
fn test_default_path_when_nothing_set() {
    let source = ConfigSource::new();
    assert_eq!(source.resolve_path(), PathBuf::from(DEFAULT_CONFIG_PATH));
}

#[test]
fn test_env_path_overrides_default() {
    let source = ConfigSource::new().with_env_path(Some("/etc/agent/env.ini".to_string()));
    assert_eq!(source.resolve_path(), PathBuf::from("/etc/agent/env.ini"));
}

#[test]
fn test_explicit_path_overrides_env() {
    let source = ConfigSource::new()
        .with_env_path(Some("/etc/agent/env.ini".to_string()))
        .with_config_path(PathBuf::from("/etc/agent/cli.ini"));
    assert_eq!(source.resolve_path(), PathBuf::from("/etc/agent/cli.ini"));
}

#[test]
fn test_blank_paths_fall_through() {
    let source = ConfigSource::new()
        .with_env_path(Some("   ".to_string()))
        .with_config_path(PathBuf::from(""))
        .with_default_path(PathBuf::from("/opt/agent/config.ini"));
    assert_eq!(source.resolve_path(), PathBuf::from("/opt/agent/config.ini"));
}

#[test]
fn test_load_missing_default_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("config.ini");

    let result = ConfigSource::new().with_default_path(missing.clone()).load();
    match result {
        Err(ConfigError::NotFound { path }) => assert_eq!(path, missing),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_open_reads_config_path_env() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), &base_config(&[]));

    temp_env::with_var(CONFIG_PATH_ENV, Some(path.as_os_str()), || {
        let reader = ConfigReader::open(None).unwrap();
        assert_eq!(reader.path(), Some(path.as_path()));
        assert_eq!(reader.get_value("General", "ScanMemoryLimit").unwrap(), "8192");
    });
}

#[test]
#[serial]
fn test_open_explicit_path_wins_over_env() {
    let _lock = env_lock().lock().unwrap();
    let env_dir = TempDir::new().unwrap();
    let cli_dir = TempDir::new().unwrap();
    let env_path = write_config(env_dir.path(), &base_config(&[("ExecArgMax", "11")]));
    let cli_path = write_config(cli_dir.path(), &base_config(&[("ExecArgMax", "99")]));

    temp_env::with_var(CONFIG_PATH_ENV, Some(env_path.as_os_str()), || {
        let reader = ConfigReader::open(Some(cli_path.clone())).unwrap();
        assert_eq!(reader.get_value("General", "ExecArgMax").unwrap(), "99");
    });
}

#[test]
#[serial]
fn test_open_env_path_missing_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.ini");

    temp_env::with_var(CONFIG_PATH_ENV, Some(missing.as_os_str()), || {
        let result = ConfigReader::open(None);
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    });
}

#[test]
#[serial]
fn test_from_env_ignores_whitespace_only_value() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var(CONFIG_PATH_ENV, Some("   "), || {
        let source = ConfigSource::new()
            .with_default_path(PathBuf::from("/opt/agent/config.ini"))
            .from_env();
        assert_eq!(source.resolve_path(), PathBuf::from("/opt/agent/config.ini"));
    });
}

#[test]
#[serial]
fn test_from_env_unset_keeps_default() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var_unset(CONFIG_PATH_ENV, || {
        let source = ConfigSource::new().from_env();
        assert_eq!(source.resolve_path(), PathBuf::from(DEFAULT_CONFIG_PATH));
    });
}

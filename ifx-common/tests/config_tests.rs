//! Tests for config file resolution and graceful degradation
//!
//! - Missing TOML files do not prevent startup
//! - Missing configs produce compiled defaults
//! - Priority order: CLI argument, IFX_CONFIG, config directories
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate IFX_CONFIG are marked with #[serial].

use ifx_common::config::{
    load_config, resolve_config_path, TomlConfig, CONFIG_ENV_VAR, DEFAULT_API_PORT,
};
use ifx_common::presets::IntervalPreset;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Should write config file");
    path
}

#[test]
#[serial]
fn test_cli_argument_beats_env_var() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/ifx-env-config.toml");

    let cli = PathBuf::from("/tmp/ifx-cli-config.toml");
    let resolved = resolve_config_path(Some(&cli));
    assert_eq!(resolved, Some(cli));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_env_var_used_without_cli_argument() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/ifx-env-config.toml");

    let resolved = resolve_config_path(None);
    assert_eq!(resolved, Some(PathBuf::from("/tmp/ifx-env-config.toml")));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_missing_file_falls_back_to_defaults() {
    env::remove_var(CONFIG_ENV_VAR);

    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist.toml");

    let config = load_config(Some(&missing)).expect("Missing file must not be fatal");
    assert_eq!(config, TomlConfig::default());
}

#[test]
#[serial]
fn test_load_from_cli_path() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[logging]
level = "debug"

[api]
port = 8080

[[form_presets]]
max_score = 10.0
max_interval = 0.5
"#,
    );

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.api.resolve_port(None, DEFAULT_API_PORT), 8080);
    assert_eq!(config.form_presets, vec![IntervalPreset::new(10.0, 0.5)]);
    // Untouched sections keep their defaults
    assert_eq!(config.api_presets.len(), 7);
}

#[test]
#[serial]
fn test_load_from_env_var_path() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[ui]\nhost = \"0.0.0.0\"\n");
    env::set_var(CONFIG_ENV_VAR, &path);

    let config = load_config(None).unwrap();
    assert_eq!(config.ui.resolve_host(None), "0.0.0.0");

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[api\nport = ");

    let err = load_config(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("config.toml"));
}

#[test]
#[serial]
fn test_invalid_preset_in_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "api_presets = []\n");

    let err = load_config(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("api_presets"));
}

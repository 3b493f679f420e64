#![cfg(not(target_arch = "wasm32"))]

use std::fs;
use tempfile::tempdir;
use waypoint_kernel::config::{ConfigError, load_client_config, load_config, validate_client_config};
use waypoint_kernel::domain::config::ClientConfig;

#[test]
fn missing_file_falls_back_to_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let cfg = load_client_config(Some(dir.path().join("absent.toml")))?;
    assert_eq!(cfg, ClientConfig::default());
    Ok(())
}

#[test]
fn file_values_override_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("client.toml");
    fs::write(
        &path,
        r#"
title = "Staging"

[window]
width = 1024.0

[log]
level = "debug"
"#,
    )?;

    let cfg = load_client_config(Some(&path))?;
    assert_eq!(cfg.title, "Staging");
    assert_eq!(cfg.mount_id, "root");
    assert!((cfg.window.width - 1024.0).abs() < f64::EPSILON);
    assert!((cfg.window.height - 800.0).abs() < f64::EPSILON);
    assert_eq!(cfg.log.level, "debug");
    Ok(())
}

#[test]
fn required_file_must_exist() {
    let dir = tempdir().expect("temp dir");
    let err = load_config::<ClientConfig>(Some(dir.path().join("absent.toml")), true)
        .expect_err("missing required file should fail");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}

#[test]
fn invalid_values_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("client.toml");
    fs::write(&path, "[window]\nwidth = 0.0\n")?;

    let err = load_client_config(Some(&path)).expect_err("zero width should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "window.width", .. }));
    Ok(())
}

#[test]
fn blank_mount_id_is_rejected() {
    let cfg = ClientConfig { mount_id: "  ".to_owned(), ..ClientConfig::default() };
    let err = validate_client_config(&cfg).expect_err("blank mount id");
    assert_eq!(err.to_string(), "Invalid config value for 'mount_id': cannot be empty");
}

use std::path::PathBuf;
use waypoint_domain::config::{ClientConfig, LogConfig, WindowConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.mount_id, "root");
    assert_eq!(cfg.title, "Waypoint");

    let window = WindowConfig::default();
    assert!((window.width - 1200.0).abs() < f64::EPSILON);
    assert!((window.height - 800.0).abs() < f64::EPSILON);

    let log = LogConfig::default();
    assert_eq!(log.level, "info");
    assert!(log.filter.is_none());
    assert!(log.path.is_none());
}

#[test]
fn client_config_deserializes() {
    let raw = json!({
        "mount_id": "app",
        "window": { "width": 640.0 },
        "log": { "level": "debug", "path": "/tmp/waypoint" }
    });

    let cfg: ClientConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.mount_id, "app");
    assert_eq!(cfg.title, "Waypoint");
    assert!((cfg.window.width - 640.0).abs() < f64::EPSILON);
    assert!((cfg.window.height - 800.0).abs() < f64::EPSILON);
    assert_eq!(cfg.log.level, "debug");
    assert_eq!(cfg.log.path, Some(PathBuf::from("/tmp/waypoint")));
}

#[test]
fn empty_document_yields_defaults() {
    let cfg: ClientConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg, ClientConfig::default());
}

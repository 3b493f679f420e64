use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use waypoint_logger::{Logger, LoggerError, parse_level};

#[test]
fn level_and_directives_shape_file_output() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let err = Logger::builder()
        .name("integration-filtered")
        .env_filter("noisy=loud")
        .init()
        .expect_err("unknown level in directives should fail");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }), "{err}");

    let logger = Logger::builder()
        .name("integration-filtered")
        .console(false)
        .file(&log_dir)
        .level(parse_level("DEBUG")?)
        .env_filter("debug,noisy=warn")
        .init()?;

    tracing::debug!(target: "waypoint_ui", "page resolved");
    tracing::info!(target: "noisy", "chatter that should be dropped");
    tracing::warn!(target: "noisy", "warning that should be kept");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");
    let contents = fs::read_to_string(log_file)?;

    assert!(contents.contains("page resolved"), "{contents}");
    assert!(contents.contains("warning that should be kept"), "{contents}");
    assert!(!contents.contains("chatter that should be dropped"), "{contents}");
    Ok(())
}

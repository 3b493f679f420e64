use serde::Deserialize;
use std::path::PathBuf;

/// Client configuration shared by the web and desktop launchers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Id of the DOM element the app is mounted into.
    pub mount_id: String,
    pub title: String,
    pub window: WindowConfig,
    pub log: LogConfig,
}

/// Native window size (desktop only).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

/// Logging knobs (desktop only; the browser logs to the devtools console).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Extra `EnvFilter` directives, e.g. `waypoint_ui=debug`.
    pub filter: Option<String>,
    /// Directory for rolling log files; console only when absent.
    pub path: Option<PathBuf>,
}

// --- Default ---

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mount_id: "root".to_owned(),
            title: "Waypoint".to_owned(),
            window: WindowConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: 1200.0, height: 800.0 }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, path: None }
    }
}

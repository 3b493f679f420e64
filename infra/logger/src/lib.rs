//! # Logger
//!
//! Global `tracing` subscriber setup for the native launchers: a compact console layer,
//! optional rolling log files written through a non-blocking worker, and `RUST_LOG`-aware
//! filtering. The browser build does not use this crate; it logs through the Dioxus logger.
//!
//! ## Example
//!
//! ```rust
//! # use waypoint_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("waypoint-desktop")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct FileOutput {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

#[derive(Debug)]
struct Settings {
    console: bool,
    level: LevelFilter,
    directives: Option<String>,
    file: Option<FileOutput>,
}

/// Builder state before a name has been given.
#[derive(Debug)]
pub struct Unnamed;

/// Builder state once the logger has a name.
#[derive(Debug)]
pub struct Named(String);

/// Configures the global tracing subscriber. A name is mandatory before [`LoggerBuilder::init`].
#[derive(Debug)]
pub struct LoggerBuilder<N = Unnamed> {
    settings: Settings,
    name: N,
}

impl LoggerBuilder<Unnamed> {
    /// Sets the logger name, also used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()) }
    }
}

impl LoggerBuilder<Named> {
    /// Minimum level when neither `RUST_LOG` nor [`Self::env_filter`] say otherwise.
    #[must_use = "The builder must be initialized to install the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Programmatic filter directives, e.g. `waypoint_ui=debug,dioxus=warn`.
    ///
    /// Invalid directives make [`Self::init`] fail.
    #[must_use = "The builder must be initialized to install the logger."]
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.settings.directives = Some(directives.into());
        self
    }

    #[must_use = "The builder must be initialized to install the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Writes rolling log files into `dir` (daily rotation by default).
    #[must_use = "The builder must be initialized to install the logger."]
    pub fn file(mut self, dir: impl Into<PathBuf>) -> Self {
        self.settings.file = Some(FileOutput {
            dir: dir.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        self
    }

    /// Rotation policy for file output. Ignored without [`Self::file`].
    #[must_use = "The builder must be initialized to install the logger."]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.settings.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    /// Number of rotated files kept on disk. Ignored without [`Self::file`].
    #[must_use = "The builder must be initialized to install the logger."]
    pub fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = self.settings.file.as_mut() {
            file.max_files = max;
        }
        self
    }

    /// Emits JSON lines in the log files. Ignored without [`Self::file`].
    #[must_use = "The builder must be initialized to install the logger."]
    pub fn json(mut self) -> Self {
        if let Some(file) = self.settings.file.as_mut() {
            file.json = true;
        }
        self
    }

    /// Installs the global subscriber.
    ///
    /// The returned [`Logger`] owns the file worker guard; keep it alive until shutdown.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`, bad filter
    ///   directives or when no output is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory is unusable.
    /// * [`LoggerError::Subscriber`] when a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { settings, name: Named(name) } = self;
        validate(&settings, &name)?;
        let filter = build_filter(&settings)?;

        let mut layers = Vec::new();
        if settings.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match settings.file {
            Some(file) => {
                fs::create_dir_all(&file.dir)
                    .context(format!("Failed to create {}", file.dir.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(file.rotation)
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(file.max_files)
                    .build(&file.dir)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if file.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder with console output at `INFO`.
    pub const fn builder() -> LoggerBuilder {
        LoggerBuilder {
            settings: Settings {
                console: true,
                level: LevelFilter::INFO,
                directives: None,
                file: None,
            },
            name: Unnamed,
        }
    }

    /// The file worker guard, present only when file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

/// Parses a level name such as `"debug"` (case-insensitive) or `"off"`.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown names.
pub fn parse_level(raw: &str) -> Result<LevelFilter, LoggerError> {
    raw.trim().parse::<LevelFilter>().map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Unknown log level '{raw}': {e}").into(),
        context: None,
    })
}

fn validate(settings: &Settings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err("Logger name cannot be empty".into());
    }
    if settings.file.as_ref().is_some_and(|f| f.max_files == 0) {
        return Err("max_files must be greater than zero".into());
    }
    if !settings.console && settings.file.is_none() {
        return Err("No logging output enabled. Enable the console or a log directory.".into());
    }
    Ok(())
}

fn build_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.directives {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{directives}': {e}").into(),
                context: None,
            }
        }),
    }
}

impl From<&'static str> for LoggerError {
    fn from(message: &'static str) -> Self {
        Self::InvalidConfiguration { message: message.into(), context: None }
    }
}

use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use waypoint_domain::config::ClientConfig;

/// Default config file stem, resolved by the `config` crate to `client.toml`, `client.json`, ...
pub const DEFAULT_CONFIG_PATH: &str = "client";

/// Prefix for environment overrides, e.g. `WAYPOINT__WINDOW__WIDTH=1024`.
pub const ENV_PREFIX: &str = "WAYPOINT";

/// Errors raised while loading or validating configuration.
#[waypoint_derive::waypoint_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: Cow<'static, str> },
}

/// Loads configuration from a file overlaid with `WAYPOINT__*` environment variables.
///
/// Nested keys are separated by double underscores (`WAYPOINT__LOG__LEVEL` maps to
/// `log.level`). When `required` is `false` a missing file is not an error and the
/// target's serde defaults fill the gaps.
///
/// # Errors
/// Returns [`ConfigError::Config`] if a required file is missing or the merged sources do
/// not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>, required: bool) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads and validates the [`ClientConfig`]. The file is optional.
///
/// # Errors
/// Returns [`ConfigError::Config`] on malformed sources and [`ConfigError::Invalid`] when a
/// value fails validation.
pub fn load_client_config(path: Option<impl AsRef<Path>>) -> Result<ClientConfig, ConfigError> {
    let cfg: ClientConfig = load_config(path, false)?;
    validate_client_config(&cfg)?;
    Ok(cfg)
}

/// Rejects values the launchers cannot work with.
///
/// # Errors
/// Returns [`ConfigError::Invalid`] naming the first offending field.
pub fn validate_client_config(cfg: &ClientConfig) -> Result<(), ConfigError> {
    if cfg.mount_id.trim().is_empty() {
        return Err(ConfigError::Invalid { field: "mount_id", reason: "cannot be empty".into() });
    }
    if cfg.title.trim().is_empty() {
        return Err(ConfigError::Invalid { field: "title", reason: "cannot be empty".into() });
    }
    for (field, value) in [("window.width", cfg.window.width), ("window.height", cfg.window.height)]
    {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::Invalid {
                field,
                reason: format!("must be a positive number, got {value}").into(),
            });
        }
    }
    if cfg.log.level.trim().is_empty() {
        warn!("Rejecting config with an empty log level");
        return Err(ConfigError::Invalid { field: "log.level", reason: "cannot be empty".into() });
    }
    Ok(())
}

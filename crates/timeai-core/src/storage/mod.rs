mod config;

pub use config::{AssistantConfig, Config, LoggingConfig, OutputConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `<base>/.config/timeai[-dev]/` based on TIMEAI_ENV.
///
/// `<base>` is `$TIMEAI_HOME` when set, otherwise the user's home directory.
/// Set TIMEAI_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if no base directory can be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = match std::env::var_os("TIMEAI_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => dirs::home_dir().ok_or(ConfigError::NoHomeDir)?,
    }
    .join(".config");

    let env = std::env::var("TIMEAI_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("timeai-dev")
    } else {
        base_dir.join("timeai")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

//! Configuration commands.
//!
//! Values are checked before they are written, so a bad `logging.level`
//! never reaches the file the next run starts from.

use clap::Subcommand;
use timeai_core::error::Result;
use timeai_core::{Config, ConfigError};
use tracing_subscriber::EnvFilter;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "assistant.default_prompt", "logging.level")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
    /// Print the config file location
    Path,
}

/// Reject values that parse as the key's type but cannot work at runtime.
pub fn validate(key: &str, value: &str) -> Result<(), ConfigError> {
    if key == "logging.level" {
        EnvFilter::try_new(value).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("not a log filter directive: {e}"),
        })?;
    }
    Ok(())
}

pub fn run(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config.get(&key).ok_or(ConfigError::UnknownKey(key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            validate(&key, &value)?;
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            tracing::debug!(%key, %value, "config updated");
            println!("ok");
        }
        ConfigAction::List => {
            let config = Config::load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("config reset to defaults");
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
    }
    Ok(())
}

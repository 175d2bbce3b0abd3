use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::command::{CommandRegistry, RegistryError};
use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}'")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}'")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed")]
    Registry(#[from] RegistryError),
}

impl ConfigError {
    pub fn error_type(&self) -> &'static str {
        match self {
            ConfigError::ReadError { .. } => "config_read_error",
            ConfigError::ParseError { .. } => "config_parse_error",
            ConfigError::Registry(err) => err.error_type(),
        }
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/clirouter/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("clirouter").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration by building its command registry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.registry().map(|_| ())
    }

    /// Build the command registry described by this config.
    pub fn registry(&self) -> Result<CommandRegistry, ConfigError> {
        Ok(CommandRegistry::new(
            self.commands.clone(),
            &self.default_command,
        )?)
    }
}

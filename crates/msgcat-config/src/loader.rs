//! Configuration loading utilities

use crate::schema::Config;
use msgcat_common::{LogFormat, MsgcatError};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming the settings file.
pub const CONFIG_PATH_VAR: &str = "MSGCAT_CONFIG_PATH";

/// Settings files tried, in order, when [`CONFIG_PATH_VAR`] is unset.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["msgcat.yaml", "msgcat.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    Validation(String),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name.
        var: String,
        /// Parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for MsgcatError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source(err.to_string(), err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config = Self::parse(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;

        info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parses YAML settings. Missing sections and fields take their defaults.
    /// A null document (`~`, or no content besides comments) yields the
    /// defaults.
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        match serde_yaml::from_str::<serde_yaml::Value>(content)? {
            serde_yaml::Value::Null => Ok(Config::default()),
            document => Ok(serde_yaml::from_value(document)?),
        }
    }

    /// Load configuration from the environment-selected file, the first
    /// default file that exists, or built-in defaults.
    pub fn load() -> Result<Config, ConfigError> {
        if let Some(path) = Self::locate() {
            return Self::load_config(path);
        }

        debug!("No configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Settings file that [`load`](Self::load) would read.
    pub fn locate() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            return Some(PathBuf::from(path));
        }
        DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |name| env::var(name).ok())
    }

    /// Apply overrides read through `lookup`, which maps a variable name to
    /// its value.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(directory) = lookup("MSGCAT_MESSAGES_DIR") {
            config.messages.directory = PathBuf::from(directory);
        }

        if let Some(language) = lookup("MSGCAT_LANGUAGE") {
            config.messages.language = language.trim().to_string();
        }

        if let Some(enabled) = lookup("MSGCAT_COLOR_CODES") {
            config.messages.translate_color_codes =
                enabled.trim().parse().map_err(|e| ConfigError::EnvParseError {
                    var: "MSGCAT_COLOR_CODES".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Some(level) = lookup("MSGCAT_LOG_LEVEL") {
            config.logging.level = level.trim().to_string();
        }

        if let Some(format) = lookup("MSGCAT_LOG_FORMAT") {
            config.logging.format =
                format
                    .parse::<LogFormat>()
                    .map_err(|e| ConfigError::EnvParseError {
                        var: "MSGCAT_LOG_FORMAT".to_string(),
                        source: Box::new(e),
                    })?;
        }

        Ok(())
    }
}

//! Runtime validation of loaded settings.

use crate::loader::ConfigError;
use crate::schema::Config;
use msgcat_common::LOG_LEVELS;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first problem found.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let language = &config.messages.language;
        if language.is_empty() {
            return Err(ConfigError::Validation(
                "messages.language cannot be empty".to_string(),
            ));
        }
        if !language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::Validation(format!(
                "messages.language '{language}' may only contain letters, digits, '_' and '-'"
            )));
        }

        let level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' must be one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigValidator::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_language_rules() {
        let mut config = Config::default();
        config.messages.language = String::new();
        assert!(config.validate().is_err());

        config.messages.language = "../etc".to_string();
        assert!(config.validate().is_err());

        config.messages.language = "pt_BR".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_rules() {
        let mut config = Config::default();
        config.logging.level = "WARN".to_string();
        assert!(config.validate().is_ok());

        config.logging.level = "loud".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }
}

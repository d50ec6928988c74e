//! Application-wide error type shared by the config and CLI crates.

use thiserror::Error;

/// Result type alias for msgcat operations.
pub type Result<T> = std::result::Result<T, MsgcatError>;

/// Main error type for msgcat operations.
#[derive(Error, Debug)]
pub enum MsgcatError {
    /// Configuration related errors.
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A message source could not be loaded.
    #[error("Localization error: {message}")]
    Localization {
        /// Human readable description.
        message: String,
        /// Language of the source that failed, when known.
        language: Option<String>,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The logging subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl MsgcatError {
    /// Creates a configuration error without a source.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a configuration error wrapping an underlying cause.
    pub fn config_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a localization error for the given language.
    pub fn localization<E>(message: impl Into<String>, language: Option<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Localization {
            message: message.into(),
            language,
            source: Some(Box::new(source)),
        }
    }
}

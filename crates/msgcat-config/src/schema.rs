//! Configuration schema definitions using serde.

use msgcat_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for msgcat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Message file configuration.
    pub messages: MessagesConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Message file configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    /// Directory holding `messages_<language>.yml` files.
    pub directory: PathBuf,
    /// Language code of the active locale file.
    pub language: String,
    /// Whether `&c` style color codes are translated to `§c` before
    /// rendering.
    ///
    /// Off by default, so a plain retrieval returns the file text
    /// unchanged. Locale files for `§`-aware consoles are written with `&`
    /// codes and expect this to be switched on.
    pub translate_color_codes: bool,
}

impl MessagesConfig {
    /// Path of the locale file for the configured language.
    #[must_use]
    pub fn primary_file(&self) -> PathBuf {
        self.directory.join(format!("messages_{}.yml", self.language))
    }
}

//! Default values for every setting.

use crate::schema::MessagesConfig;
use std::path::PathBuf;

/// Language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Directory searched for locale files when none is configured.
pub const DEFAULT_MESSAGES_DIR: &str = "messages";

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_MESSAGES_DIR),
            language: DEFAULT_LANGUAGE.to_string(),
            // Opt-in; see `MessagesConfig::translate_color_codes`.
            translate_color_codes: false,
        }
    }
}

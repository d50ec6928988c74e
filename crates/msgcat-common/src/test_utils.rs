//! Test utilities shared across the msgcat workspace.

use std::path::Path;
use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `content` to `name` inside `dir`, returning the full path.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Locale file fixtures.
pub mod message_fixtures {
    /// A small locale file exercising multi-line values, empty values and tags.
    pub fn locale_yaml() -> &'static str {
        r#"
error:
  unregistered_user: 'We''ve got\nnew lines\nand '' apostrophes'
login:
  wrong_password: '&cWrong password!'
captcha:
  wrong_captcha: 'Use /captcha %captcha_code to solve the captcha'
email:
  already_used: ''
"#
    }

    /// A settings file with every section present.
    pub fn settings_yaml() -> &'static str {
        concat!(
            "messages:\n",
            "  directory: \"lang\"\n",
            "  language: \"de\"\n",
            "  translate_color_codes: true\n",
            "\n",
            "logging:\n",
            "  level: \"debug\"\n",
            "  format: \"json\"\n",
            "  include_targets: false\n",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        // Should not panic when called multiple times
        init_test_logging();
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_write_fixture_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(dir.path(), "nested/messages_en.yml", "a: b\n");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "a: b\n");
    }

    #[test]
    fn test_fixtures_are_valid_yaml() {
        let locale: serde_yaml::Value =
            serde_yaml::from_str(message_fixtures::locale_yaml()).unwrap();
        assert!(locale.is_mapping());
        let settings: serde_yaml::Value =
            serde_yaml::from_str(message_fixtures::settings_yaml()).unwrap();
        assert!(settings.get("messages").is_some());
    }
}

//! Integration tests for msgcat-config crate.

use msgcat_common::test_utils::{message_fixtures, write_fixture};
use msgcat_common::{LogFormat, MsgcatError};
use msgcat_config::{Config, ConfigError, ConfigLoader, MessagesConfig};
use std::path::PathBuf;

#[test]
fn test_default_config_validation() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.messages.language = "en us".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_primary_file_resolution() {
    let messages = MessagesConfig {
        directory: PathBuf::from("plugins/lang"),
        language: "de".to_string(),
        translate_color_codes: false,
    };
    assert_eq!(messages.primary_file(), PathBuf::from("plugins/lang/messages_de.yml"));
    assert_eq!(
        MessagesConfig::default().primary_file(),
        PathBuf::from("messages/messages_en.yml")
    );
}

#[test]
fn test_load_full_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "msgcat.yaml", message_fixtures::settings_yaml());

    let mut config: Config = ConfigLoader::parse(&std::fs::read_to_string(&path).unwrap()).unwrap();
    config.validate().unwrap();

    assert_eq!(config.messages.directory, PathBuf::from("lang"));
    assert_eq!(config.messages.language, "de");
    assert!(config.messages.translate_color_codes);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(!config.logging.include_targets);

    config.messages.language = "fr".to_string();
    assert_eq!(config.messages.primary_file(), PathBuf::from("lang/messages_fr.yml"));
}

#[test]
fn test_load_config_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "msgcat.yaml", "logging:\n  level: chatty\n");

    let result = ConfigLoader::load_config(&path);

    // An environment override of the log level would mask the bad value
    if std::env::var("MSGCAT_LOG_LEVEL").is_err() {
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}

#[test]
fn test_load_config_reports_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "msgcat.yaml", "messages: [oops\n");

    let err = ConfigLoader::load_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));

    let converted: MsgcatError = err.into();
    assert!(converted.to_string().starts_with("Configuration error"));
}

#[test]
fn test_load_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigLoader::load_config(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::IoError(_)));
}

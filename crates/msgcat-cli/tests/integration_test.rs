//! Integration tests for the msgcat CLI crate.
//!
//! These build an [`App`] from settings pointing at a temporary locale
//! directory and check what each command writes.

use msgcat_cli::{App, CliError, Command};
use msgcat_common::test_utils::{create_temp_dir, init_test_logging, message_fixtures, write_fixture};
use msgcat_config::{Config, ConfigLoader};
use msgcat_i18n::test_utils::RecordingRecipient;
use msgcat_i18n::{MessageKey, TimeUnit};

fn config_for(dir: &std::path::Path, language: &str, colors: bool) -> Config {
    let mut config = Config::default();
    config.messages.directory = dir.to_path_buf();
    config.messages.language = language.to_string();
    config.messages.translate_color_codes = colors;
    config
}

fn show(key: &str, replacements: &[&str]) -> Command {
    Command::Show {
        key: key.to_string(),
        replacements: replacements.iter().map(|r| (*r).to_string()).collect(),
    }
}

#[test]
fn test_show_reads_configured_locale() {
    init_test_logging();
    let dir = create_temp_dir();
    write_fixture(dir.path(), "messages_de.yml", message_fixtures::locale_yaml());

    let app = App::new(&config_for(dir.path(), "de", false)).unwrap();
    let out = RecordingRecipient::default();
    assert!(app.run(&show("error.unregistered_user", &[]), &out).unwrap());

    assert_eq!(out.lines(), vec!["We've got", "new lines", "and ' apostrophes"]);
}

#[test]
fn test_show_translates_color_codes_when_enabled() {
    init_test_logging();
    let dir = create_temp_dir();
    write_fixture(dir.path(), "messages_de.yml", message_fixtures::locale_yaml());

    let app = App::new(&config_for(dir.path(), "de", true)).unwrap();
    let out = RecordingRecipient::default();
    app.run(&show("login.wrong_password", &[]), &out).unwrap();

    assert_eq!(out.lines(), vec!["\u{a7}cWrong password!"]);
}

#[test]
fn test_show_empty_message_sends_nothing() {
    init_test_logging();
    let dir = create_temp_dir();
    write_fixture(dir.path(), "messages_de.yml", message_fixtures::locale_yaml());

    let app = App::new(&config_for(dir.path(), "de", false)).unwrap();
    let out = RecordingRecipient::default();
    assert!(app.run(&show("email.already_used", &[]), &out).unwrap());

    assert_eq!(out.call_count(), 0);
}

#[test]
fn test_missing_locale_file_uses_bundled_default() {
    init_test_logging();
    let dir = create_temp_dir();

    let app = App::new(&config_for(dir.path(), "fr", false)).unwrap();
    let out = RecordingRecipient::default();
    app.run(&show("captcha.wrong_captcha", &["XYZ"]), &out).unwrap();

    let lines = out.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("XYZ"));
    assert!(!lines[0].contains("%captcha_code"));
}

#[test]
fn test_check_lists_missing_keys() {
    init_test_logging();
    let dir = create_temp_dir();
    write_fixture(dir.path(), "messages_de.yml", message_fixtures::locale_yaml());

    let app = App::new(&config_for(dir.path(), "de", false)).unwrap();
    let out = RecordingRecipient::default();
    assert!(!app.run(&Command::Check, &out).unwrap());

    let lines = out.lines();
    assert!(lines.contains(&"Missing: misc.reload".to_string()));
    assert!(!lines.contains(&"Missing: captcha.wrong_captcha".to_string()));
}

#[test]
fn test_check_passes_for_complete_locale() {
    init_test_logging();
    let dir = create_temp_dir();
    let complete: String = MessageKey::all()
        .iter()
        .map(|key| format!("{}: 'x'\n", key.path()))
        .collect();
    write_fixture(dir.path(), "messages_en.yml", &nest(&complete));

    let app = App::new(&config_for(dir.path(), "en", false)).unwrap();
    let out = RecordingRecipient::default();
    assert!(app.run(&Command::Check, &out).unwrap());
    assert_eq!(out.call_count(), 0);
}

#[test]
fn test_keys_lists_every_key() {
    let dir = create_temp_dir();
    let app = App::new(&config_for(dir.path(), "en", false)).unwrap();
    let out = RecordingRecipient::default();
    app.run(&Command::Keys, &out).unwrap();

    let lines = out.lines();
    assert_eq!(lines.len(), MessageKey::all().len());
    assert!(lines.contains(&"misc.accounts_owned_self %count".to_string()));
}

#[test]
fn test_duration_uses_bundled_labels() {
    let dir = create_temp_dir();
    let app = App::new(&config_for(dir.path(), "en", false)).unwrap();
    let out = RecordingRecipient::default();
    app.run(
        &Command::Duration {
            amount: 1,
            unit: TimeUnit::Minutes,
        },
        &out,
    )
    .unwrap();

    assert_eq!(out.lines(), vec!["1 minute"]);
}

#[test]
fn test_unknown_key_is_an_error() {
    let dir = create_temp_dir();
    let app = App::new(&config_for(dir.path(), "en", false)).unwrap();
    let err = app
        .run(&show("nope", &[]), &RecordingRecipient::default())
        .unwrap_err();
    assert!(err.to_string().contains("nope"));
    assert!(matches!(err, CliError::UnknownKey(_)));
}

#[test]
fn test_malformed_locale_file_fails_app_creation() {
    let dir = create_temp_dir();
    write_fixture(dir.path(), "messages_en.yml", "- just\n- a list\n");

    let err = App::new(&config_for(dir.path(), "en", false)).unwrap_err();
    assert!(matches!(err, CliError::Catalog(_)));
}

#[test]
fn test_app_from_settings_file() {
    let dir = create_temp_dir();
    write_fixture(
        dir.path(),
        "lang/messages_de.yml",
        "misc:\n  reload: '&aNeu geladen'\n",
    );
    let settings = write_fixture(
        dir.path(),
        "msgcat.yaml",
        &format!(
            "messages:\n  directory: '{}'\n  language: de\n  translate_color_codes: true\n",
            dir.path().join("lang").display()
        ),
    );

    let config = ConfigLoader::load_config(&settings).unwrap();
    let app = App::new(&config).unwrap();
    let out = RecordingRecipient::default();
    app.run(&show("misc.reload", &[]), &out).unwrap();

    assert_eq!(out.lines(), vec!["\u{a7}aNeu geladen"]);
}

/// Turns `a.b: v` lines into nested YAML.
fn nest(flat: &str) -> String {
    use std::collections::BTreeMap;
    let mut sections: BTreeMap<&str, Vec<(&str, &str)>> = BTreeMap::new();
    for line in flat.lines() {
        let (path, value) = line.split_once(": ").unwrap();
        let (section, leaf) = path.split_once('.').unwrap();
        sections.entry(section).or_default().push((leaf, value));
    }
    let mut out = String::new();
    for (section, entries) in sections {
        out.push_str(section);
        out.push_str(":\n");
        for (leaf, value) in entries {
            out.push_str(&format!("  {leaf}: {value}\n"));
        }
    }
    out
}

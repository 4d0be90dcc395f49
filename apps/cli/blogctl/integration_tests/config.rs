use blogctl::cli::ConfigCommands;
use blogctl::commands::config::execute;

use client_core::config::{ClientConfig, DEFAULT_BASE_URL};

use tempfile::TempDir;

#[test]
fn given_empty_dir_when_show_then_defaults_and_nothing_written() {
    let dir = TempDir::new().expect("temp dir");

    let config = execute(ConfigCommands::Show, dir.path()).expect("show");

    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert!(!dir.path().join("config.json").exists());
}

/// **VALUE**: Verifies `config set` persists only the fields given.
#[test]
fn given_set_when_executed_then_saved_and_other_fields_kept() {
    let dir = TempDir::new().expect("temp dir");
    execute(
        ConfigCommands::Set {
            base_url: None,
            timeout_secs: Some(10),
        },
        dir.path(),
    )
    .expect("set timeout");

    execute(
        ConfigCommands::Set {
            base_url: Some("https://blog.example.com".to_string()),
            timeout_secs: None,
        },
        dir.path(),
    )
    .expect("set url");

    let saved = ClientConfig::load(dir.path()).expect("load");
    assert_eq!(saved.api.base_url, "https://blog.example.com");
    assert_eq!(saved.api.timeout_secs, Some(10));
}

#[test]
fn given_invalid_url_when_set_then_error_and_file_untouched() {
    let dir = TempDir::new().expect("temp dir");

    let result = execute(
        ConfigCommands::Set {
            base_url: Some("localhost:5000".to_string()),
            timeout_secs: None,
        },
        dir.path(),
    );

    assert!(result.is_err());
    assert!(!dir.path().join("config.json").exists());
}

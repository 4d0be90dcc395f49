// Unit tests for client config load/save/env overrides
// Env-var tests are serialized because the process environment is shared

use crate::config::{BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL, TIMEOUT_ENV};
use crate::error::config::ConfigError;

use serial_test::serial;
use tempfile::TempDir;

/// **VALUE**: Verifies a missing config file yields defaults rather than an error.
///
/// **WHY THIS MATTERS**: First run has no config; the CLI must still start.
#[test]
fn given_empty_dir_when_load_then_defaults() {
    let dir = TempDir::new().expect("temp dir");

    let config = ClientConfig::load(dir.path()).expect("defaults");

    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.api.timeout_secs, None);
}

/// **VALUE**: Verifies save then load returns the same config and leaves no temp file.
///
/// **BUG THIS CATCHES**: Would catch the atomic rename being skipped.
#[test]
fn given_saved_config_when_loaded_then_values_kept() {
    let dir = TempDir::new().expect("temp dir");
    let mut config = ClientConfig::default();
    config.api.base_url = "https://blog.example.com".to_string();
    config.api.timeout_secs = Some(15);

    config.save(dir.path()).expect("save");
    let loaded = ClientConfig::load(dir.path()).expect("load");

    assert_eq!(loaded, config);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn given_partial_json_when_loaded_then_missing_fields_defaulted() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("config.json"), r#"{ "api": { "timeout_secs": 5 } }"#)
        .expect("write");

    let config = ClientConfig::load(dir.path()).expect("load");

    assert_eq!(config.version, 1);
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.api.timeout_secs, Some(5));
}

#[test]
fn given_malformed_json_when_loaded_then_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("config.json"), "{ not json").expect("write");

    let result = ClientConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Verifies invalid values are rejected before anything is written.
#[test]
fn given_invalid_values_when_validated_then_rejected() {
    let mut bad_scheme = ClientConfig::default();
    bad_scheme.api.base_url = "ftp://example.com".to_string();
    assert!(matches!(
        bad_scheme.validate(),
        Err(ConfigError::ValidationError { .. })
    ));

    let mut zero_timeout = ClientConfig::default();
    zero_timeout.api.timeout_secs = Some(0);
    assert!(zero_timeout.validate().is_err());

    let mut future_version = ClientConfig::default();
    future_version.version = 2;
    assert!(future_version.validate().is_err());

    let dir = TempDir::new().expect("temp dir");
    assert!(bad_scheme.save(dir.path()).is_err());
    assert!(!dir.path().join("config.json").exists());
}

/// **VALUE**: Verifies environment variables override file values.
///
/// **WHY THIS MATTERS**: Pointing the CLI at staging should not require editing config.
#[test]
#[serial]
fn given_env_vars_when_overrides_applied_then_config_updated() {
    // SAFETY: serialized with every other env-mutating test
    unsafe {
        std::env::set_var(BASE_URL_ENV, "https://staging.example.com");
        std::env::set_var(TIMEOUT_ENV, "30");
    }

    let mut config = ClientConfig::default();
    let result = config.apply_env_overrides();

    unsafe {
        std::env::remove_var(BASE_URL_ENV);
        std::env::remove_var(TIMEOUT_ENV);
    }

    result.expect("overrides are valid");
    assert_eq!(config.api.base_url, "https://staging.example.com");
    assert_eq!(config.api.timeout_secs, Some(30));
}

#[test]
#[serial]
fn given_non_numeric_timeout_when_overrides_applied_then_validation_error() {
    unsafe {
        std::env::set_var(TIMEOUT_ENV, "soon");
    }

    let mut config = ClientConfig::default();
    let result = config.apply_env_overrides();

    unsafe {
        std::env::remove_var(TIMEOUT_ENV);
    }

    let err = result.expect_err("timeout must be numeric");
    assert!(matches!(
        err,
        ConfigError::EnvOverride {
            variable: TIMEOUT_ENV,
            ..
        }
    ));
    assert!(err.to_string().contains("BLOG_API_TIMEOUT_SECS=soon"));
}

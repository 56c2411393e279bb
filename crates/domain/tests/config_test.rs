use ppdig_domain::{CliOverrides, Config, ConfigError};
use std::time::Duration;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.query.timeout_secs, 5);
    assert_eq!(config.query.recv_buffer_size, 4096);
    assert!(!config.query.strict_metadata);
    assert_eq!(config.logging.level, "warn");
    assert!(config.validate().is_ok());
}

#[test]
fn test_timeout_zero_disables_deadline() {
    let mut config = Config::default();
    assert_eq!(config.query.timeout(), Some(Duration::from_secs(5)));

    config.query.timeout_secs = 0;
    assert_eq!(config.query.timeout(), None);
}

#[test]
fn test_parse_partial_toml() {
    let config = Config::from_toml(
        r#"
        [query]
        timeout_secs = 2
        "#,
    )
    .unwrap();

    assert_eq!(config.query.timeout_secs, 2);
    assert_eq!(config.query.recv_buffer_size, 4096);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_parse_full_toml() {
    let config = Config::from_toml(
        r#"
        [query]
        timeout_secs = 10
        recv_buffer_size = 1232
        strict_metadata = true

        [logging]
        level = "debug"
        "#,
    )
    .unwrap();

    assert_eq!(config.query.timeout_secs, 10);
    assert_eq!(config.query.recv_buffer_size, 1232);
    assert!(config.query.strict_metadata);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_parse_empty_toml_uses_defaults() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config.query.timeout_secs, 5);
}

#[test]
fn test_parse_error() {
    let result = Config::from_toml("[query]\ntimeout_secs = \"soon\"");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_cli_overrides_win() {
    let mut config = Config::default();
    config.apply_cli_overrides(CliOverrides {
        timeout_secs: Some(0),
        recv_buffer_size: Some(8192),
        strict_metadata: true,
        log_level: Some("trace".to_string()),
    });

    assert_eq!(config.query.timeout_secs, 0);
    assert_eq!(config.query.recv_buffer_size, 8192);
    assert!(config.query.strict_metadata);
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_empty_overrides_keep_file_values() {
    let mut config = Config::from_toml("[query]\nstrict_metadata = true").unwrap();
    config.apply_cli_overrides(CliOverrides::default());
    assert!(config.query.strict_metadata);
}

#[test]
fn test_validate_rejects_tiny_buffer() {
    let mut config = Config::default();
    config.query.recv_buffer_size = 100;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_oversized_buffer() {
    let mut config = Config::default();
    config.query.recv_buffer_size = 70_000;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_load_missing_file() {
    let result = Config::load(
        Some("/nonexistent/ppdig-test-config.toml"),
        CliOverrides::default(),
    );
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

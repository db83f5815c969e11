// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tests for the configuration module.

use crate::config::{ConfigLoader, LanaiConfig, OutputFormat, Validate};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = LanaiConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.output.format, OutputFormat::Text);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = LanaiConfig::default();

    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.dictionary.separator = String::new();
    assert!(config.validate().is_err());

    config.dictionary.separator = "=".to_string();
    assert!(config.validate().is_ok());
}

/// Test loading configuration with no file at all.
#[test]
fn test_load_defaults_only() {
    let loader = ConfigLoader::new(None::<&str>, "TEST_DEFAULTS_ONLY");
    let config = loader.load().unwrap();
    assert_eq!(config, LanaiConfig::default());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_file_test.toml",
            r#"
            [log]
            level = "debug"

            [dictionary]
            separator = " => "

            [output]
            format = "json"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.log.level, "debug");
    assert_eq!(config.dictionary.separator, " => ");
    assert_eq!(config.output.format, OutputFormat::Json);

    // Other values should be defaults
    assert_eq!(config.dictionary.comment_prefix, "#");
    assert!(!config.log.json);
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config.json", r#"{ "dictionary": { "allow_missing_value": false } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON").load().unwrap();
    assert!(!config.dictionary.allow_missing_value);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config_env_test.toml", "[log]\nlevel = \"info\"\n")
        .unwrap();

    fixture.set_env("TEST_ENV__LOG__LEVEL", "trace");
    fixture.set_env("TEST_ENV__OUTPUT__FORMAT", "json");

    let config = ConfigLoader::new(Some(&config_path), "TEST_ENV").load().unwrap();

    assert_eq!(config.log.level, "trace");
    assert_eq!(config.output.format, OutputFormat::Json);
}

/// Test that an invalid file value is rejected by validation.
#[test]
fn test_invalid_file_value_rejected() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("invalid.toml", "[log]\nlevel = \"loud\"\n")
        .unwrap();

    let result = ConfigLoader::new(Some(&config_path), "TEST_INVALID").load();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

/// Test that a missing configuration file is reported.
#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let missing = fixture.temp_dir.path().join("missing.toml");

    let result = ConfigLoader::new(Some(&missing), "TEST_MISSING").load();
    assert!(matches!(result, Err(ConfigError::FileNotFound(path)) if path == missing));
}

/// Test that unsupported extensions are rejected.
#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("config.ini", "level=debug").unwrap();

    let result = ConfigLoader::new(Some(&path), "TEST_INI").load();
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

/// Test that the default configuration survives a TOML round trip.
#[test]
fn test_default_config_toml() {
    let toml = toml::to_string_pretty(&LanaiConfig::default()).unwrap();
    let parsed: LanaiConfig = toml::from_str(&toml).unwrap();
    assert_eq!(parsed, LanaiConfig::default());
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for loading configuration files from disk.

use std::io::Write;

use tempfile::NamedTempFile;

use xor_literal::config::{CliOverrides, Config};
use xor_literal::{ConfigError, Quote, XorEncoder};

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_explicit_file() {
    let file = config_file("fixed_len = 4\nsupport_chars = \"!#$%&()*+,-./:;<=>?@[]^_`{|}~ \"\nquote = \"double\"\n");
    let config = Config::load(Some(file.path()), None).unwrap();

    assert_eq!(config.fixed_len, 4);
    assert_eq!(config.quote, Quote::Double);
    let support = config.support_set().unwrap();
    assert!(support.contains(b'~'));
    assert!(!support.contains(b'a'));
}

#[test]
fn test_cli_overrides_file() {
    let file = config_file("fixed_len = 4\nblocked_regex = \"[a-z]\"\n");
    let cli = CliOverrides {
        fixed_len: Some(5),
        quote: Some(Quote::Double),
        ..CliOverrides::default()
    };
    let config = Config::load(Some(file.path()), Some(&cli)).unwrap();

    assert_eq!(config.fixed_len, 5);
    assert_eq!(config.quote, Quote::Double);
    assert_eq!(config.blocked_regex.as_deref(), Some("[a-z]"));
}

#[test]
fn test_cli_fixed_len_beats_file_auto_len() {
    let file = config_file("auto_len = true\n");
    let cli = CliOverrides {
        fixed_len: Some(4),
        ..CliOverrides::default()
    };
    let config = Config::load(Some(file.path()), Some(&cli)).unwrap();

    assert_eq!(config.fixed_len, 4);
    assert!(!config.auto_len);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let err = Config::load(Some(&missing), None).unwrap_err();
    assert!(matches!(err, ConfigError::Unreadable { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_malformed_file_reports_path() {
    let file = config_file("fixed_len = [");
    let err = Config::load(Some(file.path()), None).unwrap_err();
    match err {
        ConfigError::ParseError { path, .. } => {
            assert_eq!(path, file.path().display().to_string());
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_invalid_length_in_file_fails_validation() {
    let file = config_file("fixed_len = 1\n");
    let err = Config::load(Some(file.path()), None).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "fixed_len"));
}

#[test]
fn test_loaded_config_drives_encoder() {
    let file = config_file("fixed_len = 3\nblocked_regex = \"[a-zA-Z0-9]\"\n");
    let config = Config::load(Some(file.path()), None).unwrap();
    let encoder = XorEncoder::with_fixed_len(config.support_set().unwrap(), config.fixed_len).unwrap();

    let expr = encoder.encode("shell.php").unwrap();
    let rendered = expr.render(config.quote);
    assert!(!rendered.chars().any(|c| c.is_ascii_alphanumeric()));
    assert_eq!(expr.decode(), "shell.php");
}

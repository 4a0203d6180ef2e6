//! Configuration loading tests.

use std::io::Write;

use clap::Parser;
use health_assess::cli::args::{Args, OutputFormat};
use health_assess::config::{AssessConfig, ConfigFile};
use health_assess::AssessError;

fn config_file(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_file_from_flag() {
    let file = config_file(
        "endpoint = \"http://127.0.0.1:5000/predict\"\nconnect_timeout_ms = 250\n\n[output]\nformat = \"json\"\n",
    );
    let path = file.path().to_str().unwrap().to_string();
    let args = Args::try_parse_from(["health-assess", "validate", "--config", &path]).unwrap();

    let loaded = ConfigFile::load(file.path()).unwrap();
    let config = AssessConfig::resolve(&args, Some(loaded), |_| None).unwrap();

    assert_eq!(config.endpoint, "http://127.0.0.1:5000/predict");
    assert_eq!(config.transport.connect_timeout_ms, 250);
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn test_flags_beat_config_file() {
    let file = config_file("endpoint = \"http://file.test/predict\"\n[output]\nformat = \"json\"\n");
    let args = Args::try_parse_from([
        "health-assess",
        "--endpoint",
        "http://flag.test/predict",
        "--format",
        "text",
        "--no-color",
    ])
    .unwrap();

    let loaded = ConfigFile::load(file.path()).unwrap();
    let config = AssessConfig::resolve(&args, Some(loaded), |_| None).unwrap();

    assert_eq!(config.endpoint, "http://flag.test/predict");
    assert_eq!(config.format, OutputFormat::Text);
    assert!(!config.color);
}

#[test]
fn test_missing_config_file() {
    let err = ConfigFile::load(std::path::Path::new("/nonexistent/health-assess.toml")).unwrap_err();
    assert!(matches!(err, AssessError::Io { .. }));
}

#[test]
fn test_malformed_config_file() {
    let file = config_file("endpoint = [not toml");
    let err = ConfigFile::load(file.path()).unwrap_err();
    assert!(matches!(err, AssessError::Config { .. }));
}

#[test]
fn test_load_with_explicit_config_path() {
    let file = config_file("read_timeout_ms = 1234\n");
    let path = file.path().to_str().unwrap().to_string();
    let args = Args::try_parse_from(["health-assess", "--config", &path]).unwrap();

    let config = AssessConfig::load(&args).unwrap();

    assert_eq!(config.transport.read_timeout_ms, 1234);
}

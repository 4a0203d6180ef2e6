//! CLI integration tests.
//!
//! Tests for argument parsing, record loading and command handling.

use std::io::{Cursor, Write};

use clap::Parser;
use health_assess::cli::args::{Args, Command, OutputFormat};
use health_assess::commands::{self, describe, fields, fill, validate};
use health_assess::engine::result::ReportOutcome;
use health_assess::form::{is_valid, Field, FormRecord};
use health_assess::AssessError;

fn parse(args: &[&str]) -> Args {
    let mut full = vec!["health-assess"];
    full.extend_from_slice(args);
    Args::try_parse_from(full).unwrap()
}

fn record_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_args() {
    let args = parse(&[]);
    assert_eq!(args.command(), Command::Submit);
    assert!(args.input.is_none());
    assert!(args.sets.is_empty());
    assert!(!args.quiet);
    assert!(!args.verbose);
}

#[test]
fn test_version_command() {
    assert_eq!(parse(&["version"]).command(), Command::Version);
}

#[test]
fn test_fill_no_submit() {
    assert_eq!(
        parse(&["fill", "--no-submit"]).command(),
        Command::Fill { no_submit: true }
    );
}

#[test]
fn test_unknown_flag_rejected() {
    assert!(Args::try_parse_from(["health-assess", "--hardware"]).is_err());
}

#[test]
fn test_validate_command_from_file_and_sets() {
    let file = record_file(
        r#"{
            "age": 45, "gender": "Male", "race": "Asian", "occupation": "Teacher",
            "height": 170, "weight": 70, "systolicBP": 120, "diastolicBP": 80,
            "heartRate": 70, "sleepDuration": 7, "sleepQuality": 8, "dailySteps": 5000,
            "physicalActivity": "No", "smoking": "No", "alcoholDrinking": "No",
            "physicalHealth": 2, "mentalHealth": 2, "stressLevel": 3, "genHealth": "Good",
            "diffWalking": "No", "stroke": "No", "diabetic": "Pre-diabetic", "asthma": "No",
            "kidneyDisease": "No", "skinCancer": "No", "goodCholesterol": "Low",
            "uricAcidCategory": "High"
        }"#,
    );
    let path = file.path().to_str().unwrap().to_string();
    let args = parse(&["validate", "--input", &path]);
    let record = commands::load_record(args.input.as_deref(), &args.sets).unwrap();
    assert!(is_valid(&record));
    assert_eq!(validate::run(record).outcome, ReportOutcome::Valid);

    let args = parse(&["validate", "--input", &path, "--set", "stressLevel=11"]);
    let record = commands::load_record(args.input.as_deref(), &args.sets).unwrap();
    let report = validate::run(record);
    assert_eq!(report.outcome, ReportOutcome::Blocked);
    assert_eq!(
        report.errors.get(Field::StressLevel),
        Some("Stress Level must be between 1 and 10")
    );
}

#[test]
fn test_unknown_field_in_file_is_error() {
    let file = record_file(r#"{"age": 45, "cholesterolLDL": 130}"#);
    let err = commands::load_record(Some(file.path()), &[]).unwrap_err();
    assert!(matches!(err, AssessError::UnknownField { ref key } if key == "cholesterolLDL"));
}

#[test]
fn test_describe_and_fields() {
    assert!(describe::run("stroke", OutputFormat::Text).contains("History of stroke or TIA"));
    assert_eq!(describe::run("nope", OutputFormat::Text), "nope: no description");
    assert!(fields::run(OutputFormat::Text).contains("urineAlbuminCreatinineRatio"));
}

#[test]
fn test_fill_starts_from_loaded_record() {
    let sets = vec![("age".to_string(), "60".to_string())];
    let start = commands::load_record(None, &sets).unwrap();
    let mut prompts = Vec::new();

    // Keep the loaded age, then answer gender and stop.
    let record = fill::run(Cursor::new("\nMale\n"), &mut prompts, start).unwrap();

    assert_eq!(record.get(Field::Age), "60");
    assert_eq!(record.get(Field::Gender), "Male");
    let prompts = String::from_utf8(prompts).unwrap();
    assert!(prompts.contains("Age [18-100] (60): "));
    assert!(prompts.contains("Gender [Male/Female]: "));
    assert_eq!(record, FormRecord::new().with_value(Field::Age, "60").with_value(Field::Gender, "Male"));
}

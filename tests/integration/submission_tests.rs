//! Submission workflow tests.
//!
//! Drives the orchestrator and `run_assessment` with a recording transport.

use health_assess::config::AssessConfig;
use health_assess::engine::result::ReportOutcome;
use health_assess::form::testdata::reference_record;
use health_assess::form::{
    validate, Field, FormAction, FormRecord, FormState, SubmissionStatus,
};
use health_assess::submit::orchestrator::BLOCKED_ALERT;
use health_assess::submit::{SubmissionOrchestrator, SubmissionOutcome, SubmitError};
use health_assess::{run_assessment, NoHooks};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::mocks::{HookEvent, RecordingHooks, RecordingTransport};

const ENDPOINT: &str = "http://prediction.test/predict";

#[test]
fn test_reference_record_posts_coerced_payload() {
    let transport = RecordingTransport::ok(json!({"heart": 0.12}));
    let orchestrator = SubmissionOrchestrator::new(&transport, ENDPOINT);
    let mut hooks = RecordingHooks::default();

    let (_, outcome) =
        orchestrator.submit(FormState::from_record(reference_record()), &mut hooks);

    assert!(matches!(outcome, SubmissionOutcome::Submitted(_)));
    assert_eq!(transport.post_count(), 1);

    let body = transport.last_body().unwrap();
    assert_eq!(
        body,
        json!({
            "age": 45,
            "gender": "Male",
            "race": "Asian",
            "occupation": "Teacher",
            "height": 170,
            "weight": 70,
            "systolicBP": 120,
            "diastolicBP": 80,
            "heartRate": 70,
            "sleepDuration": 7,
            "sleepQuality": 8,
            "dailySteps": 5000,
            "physicalActivity": "Yes",
            "physicalActivityDuration": 30,
            "smoking": "No",
            "alcoholDrinking": "No",
            "physicalHealth": 2,
            "mentalHealth": 2,
            "stressLevel": 3,
            "genHealth": "Good",
            "diffWalking": "No",
            "stroke": "No",
            "diabetic": "No",
            "asthma": "No",
            "kidneyDisease": "No",
            "skinCancer": "No",
            "goodCholesterol": "Normal",
            "uricAcidCategory": "Normal",
            "albuminuria": "",
            "urineAlbuminCreatinineRatio": "",
            "trigCategory": ""
        })
    );
}

#[test]
fn test_hook_order_on_success() {
    let transport = RecordingTransport::ok(json!({"heart": 0.12}));
    let orchestrator = SubmissionOrchestrator::new(&transport, ENDPOINT);
    let mut hooks = RecordingHooks::default();

    orchestrator.submit(FormState::from_record(reference_record()), &mut hooks);

    assert_eq!(
        hooks.events,
        vec![
            HookEvent::Open(true),
            HookEvent::Loading(true),
            HookEvent::Output(json!({"heart": 0.12})),
            HookEvent::Loading(false),
        ]
    );
}

#[test]
fn test_age_out_of_range_issues_zero_posts() {
    let transport = RecordingTransport::ok(json!({}));
    let orchestrator = SubmissionOrchestrator::new(&transport, ENDPOINT);
    let mut hooks = RecordingHooks::default();
    let record = reference_record().with_value(Field::Age, "101");

    let (state, outcome) = orchestrator.submit(FormState::from_record(record), &mut hooks);

    assert_eq!(transport.post_count(), 0);
    assert_eq!(hooks.events, vec![HookEvent::Alert(BLOCKED_ALERT.to_string())]);
    assert_eq!(state.status, SubmissionStatus::Blocked);
    assert_eq!(
        state.errors.get(Field::Age),
        Some("Age must be between 18 and 100")
    );
    assert!(matches!(outcome, SubmissionOutcome::Blocked(_)));
}

#[test]
fn test_empty_form_blocks_with_every_required_error() {
    let transport = RecordingTransport::ok(json!({}));
    let orchestrator = SubmissionOrchestrator::new(&transport, ENDPOINT);
    let mut hooks = RecordingHooks::default();

    let (state, _) = orchestrator.submit(FormState::new(), &mut hooks);

    assert_eq!(transport.post_count(), 0);
    assert_eq!(state.errors.len(), 27);
    assert_eq!(state.errors, validate(&FormRecord::new()));
}

#[test]
fn test_fixing_errors_then_resubmitting() {
    let transport = RecordingTransport::ok(json!({"heart": 0.3}));
    let orchestrator = SubmissionOrchestrator::new(&transport, ENDPOINT);
    let mut hooks = RecordingHooks::default();
    let record = reference_record()
        .with_value(Field::Age, "101")
        .with_value(Field::Gender, "");

    let (state, _) = orchestrator.submit(FormState::from_record(record), &mut hooks);
    assert_eq!(state.errors.len(), 2);

    let state = state.apply(FormAction::Edit {
        field: Field::Age,
        value: "45".into(),
    });
    assert_eq!(state.errors.len(), 1);
    assert!(state.errors.contains(Field::Gender));

    let state = state.apply(FormAction::Edit {
        field: Field::Gender,
        value: "Female".into(),
    });
    assert!(state.errors.is_empty());

    let (state, outcome) = orchestrator.submit(state, &mut hooks);
    assert!(matches!(outcome, SubmissionOutcome::Submitted(_)));
    assert_eq!(transport.post_count(), 1);
    assert_eq!(state.status, SubmissionStatus::Completed(json!({"heart": 0.3})));
}

#[test]
fn test_inactive_duration_sent_as_zero() {
    let transport = RecordingTransport::ok(json!({}));
    let orchestrator = SubmissionOrchestrator::new(&transport, ENDPOINT);
    let record = reference_record()
        .with_value(Field::PhysicalActivity, "No")
        .with_value(Field::PhysicalActivityDuration, "");

    orchestrator.submit(FormState::from_record(record), &mut RecordingHooks::default());

    let body = transport.last_body().unwrap();
    assert_eq!(body["physicalActivityDuration"], json!(0));
    assert_eq!(body["physicalActivity"], json!("No"));
}

#[test]
fn test_filled_optional_fields_are_sent() {
    let transport = RecordingTransport::ok(json!({}));
    let orchestrator = SubmissionOrchestrator::new(&transport, ENDPOINT);
    let record = reference_record()
        .with_value(Field::Albuminuria, "Yes")
        .with_value(Field::UrineAlbuminCreatinineRatio, "35.5")
        .with_value(Field::TrigCategory, "High");

    orchestrator.submit(FormState::from_record(record), &mut RecordingHooks::default());

    let body = transport.last_body().unwrap();
    assert_eq!(body["albuminuria"], json!("Yes"));
    assert_eq!(body["urineAlbuminCreatinineRatio"], json!(35.5));
    assert_eq!(body["trigCategory"], json!("High"));
}

#[test]
fn test_transport_failure_reverts_loading() {
    let transport = RecordingTransport::failing(SubmitError::Transport {
        endpoint: ENDPOINT.into(),
        message: "connection refused".into(),
    });
    let orchestrator = SubmissionOrchestrator::new(&transport, ENDPOINT);
    let mut hooks = RecordingHooks::default();

    let (state, outcome) =
        orchestrator.submit(FormState::from_record(reference_record()), &mut hooks);

    assert_eq!(transport.post_count(), 1);
    assert!(!hooks.is_loading());
    assert!(matches!(hooks.events.last(), Some(HookEvent::Failure(_))));
    assert!(matches!(outcome, SubmissionOutcome::Failed(SubmitError::Transport { .. })));
    assert!(matches!(state.status, SubmissionStatus::Failed(_)));
}

#[test]
fn test_run_assessment_reports_failure_exit_code() {
    let transport = RecordingTransport::failing(SubmitError::Status {
        status: 500,
        body: "model unavailable".into(),
    });
    let config = AssessConfig {
        endpoint: ENDPOINT.into(),
        ..AssessConfig::default()
    };

    let report = run_assessment(&config, reference_record(), &transport, &mut NoHooks);

    assert!(matches!(report.outcome, ReportOutcome::Failed(_)));
    assert_eq!(report.exit_code(), 2);
    assert_eq!(report.endpoint.as_deref(), Some(ENDPOINT));
}

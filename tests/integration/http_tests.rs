//! HTTP transport tests against a local listener.

use health_assess::config::AssessConfig;
use health_assess::engine::result::ReportOutcome;
use health_assess::form::testdata::reference_record;
use health_assess::submit::{HttpTransport, PredictionTransport, SubmitError, TransportConfig};
use health_assess::{run_assessment, NoHooks};
use serde_json::{json, Value};

use crate::mocks::{closed_port_url, MockServer};

fn fast_transport() -> HttpTransport {
    HttpTransport::with_config(TransportConfig {
        connect_timeout_ms: 2_000,
        read_timeout_ms: 5_000,
    })
}

#[test]
fn test_post_sends_json_headers_and_body() {
    let server = MockServer::respond(200, r#"{"heart": 0.42}"#);
    let url = server.url.clone();

    let response = fast_transport()
        .post_json(&url, &json!({"age": 45, "gender": "Male"}))
        .unwrap();
    let request = server.request();

    assert_eq!(response, json!({"heart": 0.42}));
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/predict");
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.header("accept"), Some("application/json"));
    assert_eq!(request.header("authorization"), None);
    let body: Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body, json!({"age": 45, "gender": "Male"}));
}

#[test]
fn test_error_status_maps_to_status_error() {
    let server = MockServer::respond(500, r#"{"error": "model unavailable"}"#);
    let url = server.url.clone();

    let err = fast_transport().post_json(&url, &json!({})).unwrap_err();
    server.request();

    match err {
        SubmitError::Status { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("model unavailable"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[test]
fn test_non_json_body_is_decode_error() {
    let server = MockServer::respond(200, "<html>oops</html>");
    let url = server.url.clone();

    let err = fast_transport().post_json(&url, &json!({})).unwrap_err();
    server.request();

    assert!(matches!(err, SubmitError::Decode { .. }));
}

#[test]
fn test_empty_body_is_null() {
    let server = MockServer::respond(200, "");
    let url = server.url.clone();

    let response = fast_transport().post_json(&url, &json!({})).unwrap();
    server.request();

    assert_eq!(response, Value::Null);
}

#[test]
fn test_connection_refused_is_transport_error() {
    let url = closed_port_url();
    let err = fast_transport().post_json(&url, &json!({})).unwrap_err();
    match err {
        SubmitError::Transport { endpoint, .. } => assert_eq!(endpoint, url),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[test]
fn test_full_assessment_over_http() {
    let server = MockServer::respond(200, r#"{"heart": 0.05}"#);
    let config = AssessConfig {
        endpoint: server.url.clone(),
        ..AssessConfig::default()
    };

    let report = run_assessment(&config, reference_record(), fast_transport(), &mut NoHooks);
    let request = server.request();

    match report.outcome {
        ReportOutcome::Submitted(ref result) => assert_eq!(result.heart_score(), Some(0.05)),
        ref other => panic!("unexpected outcome {:?}", other),
    }
    let body: Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body["systolicBP"], json!(120));
    assert_eq!(body["trigCategory"], json!(""));
}

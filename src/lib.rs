//! health-assess library
//!
//! Medical and lifestyle assessment form with validation, payload coercion
//! and submission to a remote prediction service.
//!
//! This library provides:
//! - A typed registry of the 31 form fields with labels, sections and help text
//! - Declarative per-field rules, including one conditional rule
//! - Validation of a record into per-field error messages
//! - Coercion of a valid record into the JSON submission payload
//! - A submit workflow that posts once and reports through caller hooks
//!
//! # Example
//!
//! ```no_run
//! use health_assess::config::AssessConfig;
//! use health_assess::form::{Field, FormRecord};
//! use health_assess::submit::HttpTransport;
//! use health_assess::{run_assessment, NoHooks};
//!
//! let config = AssessConfig::default();
//! let record = FormRecord::new().with_value(Field::Age, "45");
//! let transport = HttpTransport::with_config(config.transport.clone());
//! let report = run_assessment(&config, record, transport, &mut NoHooks);
//! println!("Exit code: {}", report.exit_code());
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod form;
pub mod submit;
pub mod version;

use std::io;

use log::debug;
use thiserror::Error;

use config::AssessConfig;
use engine::result::{AssessmentReport, ReportOutcome};
use form::{validate, FormRecord, FormState};
use submit::{
    PredictionResult, PredictionTransport, SubmissionHooks, SubmissionOrchestrator, SubmitError,
};

// Re-exports for public API
pub use engine::result::{ReportSummary, AssessmentReport as Report};

/// Error types for health-assess operations.
#[derive(Debug, Error)]
pub enum AssessError {
    /// I/O error
    #[error("I/O error {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
    /// Parse error
    #[error("Parse error in {context}: {message}")]
    Parse { context: String, message: String },
    /// Invalid configuration
    #[error("Configuration error: {message}")]
    Config { message: String },
    /// Record names a field the form does not have
    #[error("Unknown field '{key}'")]
    UnknownField { key: String },
    /// Numeric field could not be coerced for the payload
    #[error("Field '{field}' is not a number: '{value}'")]
    Coercion { field: String, value: String },
    /// Submission error outside the orchestrator
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Hooks that ignore every event.
pub struct NoHooks;

impl SubmissionHooks for NoHooks {
    fn open(&mut self, _open: bool) {}
    fn loading(&mut self, _loading: bool) {}
    fn alert(&mut self, _message: &str) {}
    fn output(&mut self, _result: &PredictionResult) {}
    fn failure(&mut self, _error: &SubmitError) {}
}

/// Validate a record without submitting it.
pub fn check_record(record: FormRecord) -> AssessmentReport {
    let errors = validate(&record);
    let outcome = if errors.is_empty() {
        ReportOutcome::Valid
    } else {
        ReportOutcome::Blocked
    };
    AssessmentReport::new(record, errors, outcome)
}

/// Validate a record and, when it is valid, submit it once.
///
/// Failures are folded into the report outcome rather than returned, so the
/// caller always gets something to render.
pub fn run_assessment<T: PredictionTransport>(
    config: &AssessConfig,
    record: FormRecord,
    transport: T,
    hooks: &mut dyn SubmissionHooks,
) -> AssessmentReport {
    debug!("running assessment against {}", config.endpoint);
    let orchestrator = SubmissionOrchestrator::new(transport, config.endpoint.clone());
    let (state, outcome) = orchestrator.submit(FormState::from_record(record), hooks);

    AssessmentReport::new(state.record, state.errors, outcome.into())
        .with_endpoint(orchestrator.endpoint())
}

//! Assessment report and per-field summary.

use chrono::{DateTime, Utc};

use crate::form::rules::rule_for;
use crate::form::{ErrorRecord, Field, FormRecord};
use crate::submit::{PredictionResult, SubmissionOutcome, SubmitError};

/// Per-field status in a report.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldStatus {
    /// Filled and valid
    Pass,
    /// Failed validation
    Fail(String),
    /// Empty optional field, or exempt by a conditional rule
    Skip,
}

/// How an assessment run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    /// Validated only, no submission attempted
    Valid,
    /// Validation failed, nothing was sent
    Blocked,
    Submitted(PredictionResult),
    Failed(SubmitError),
    /// Another submission was still in flight, nothing was sent
    InFlight,
}

impl From<SubmissionOutcome> for ReportOutcome {
    fn from(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Blocked(_) => ReportOutcome::Blocked,
            SubmissionOutcome::Submitted(result) => ReportOutcome::Submitted(result),
            SubmissionOutcome::Failed(error) => ReportOutcome::Failed(error),
            SubmissionOutcome::AlreadyInFlight => ReportOutcome::InFlight,
        }
    }
}

impl ReportOutcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            ReportOutcome::Valid | ReportOutcome::Submitted(_) => 0,
            ReportOutcome::Blocked => 1,
            ReportOutcome::Failed(_) | ReportOutcome::InFlight => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportOutcome::Valid => "valid",
            ReportOutcome::Blocked => "blocked",
            ReportOutcome::Submitted(_) => "submitted",
            ReportOutcome::Failed(_) => "failed",
            ReportOutcome::InFlight => "in_flight",
        }
    }
}

/// Field counts by status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    pub total: u32,
}

/// Everything a formatter needs to render one run.
#[derive(Debug, Clone)]
pub struct AssessmentReport {
    pub timestamp: DateTime<Utc>,
    /// Target endpoint, absent for validate-only runs
    pub endpoint: Option<String>,
    pub record: FormRecord,
    pub errors: ErrorRecord,
    pub outcome: ReportOutcome,
}

impl AssessmentReport {
    pub fn new(record: FormRecord, errors: ErrorRecord, outcome: ReportOutcome) -> Self {
        AssessmentReport {
            timestamp: Utc::now(),
            endpoint: None,
            record,
            errors,
            outcome,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn field_status(&self, field: Field) -> FieldStatus {
        if let Some(message) = self.errors.get(field) {
            return FieldStatus::Fail(message.to_string());
        }
        if rule_for(field).applies(&self.record) && self.record.is_filled(field) {
            FieldStatus::Pass
        } else {
            FieldStatus::Skip
        }
    }

    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary::default();
        for field in Field::ALL {
            summary.total += 1;
            match self.field_status(field) {
                FieldStatus::Pass => summary.passed += 1,
                FieldStatus::Fail(_) => summary.failed += 1,
                FieldStatus::Skip => summary.skipped += 1,
            }
        }
        summary
    }

    pub fn exit_code(&self) -> u8 {
        self.outcome.exit_code()
    }
}

//! Owned form state with a single update entry point.

use super::field::Field;
use super::record::{ErrorRecord, FormRecord};
use log::warn;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// Last submit attempt failed validation
    Blocked,
    InFlight,
    Completed(Value),
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionStatus::InFlight)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Edit { field: Field, value: String },
    SubmitBlocked(ErrorRecord),
    SubmitStarted,
    SubmitSucceeded(Value),
    SubmitFailed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub record: FormRecord,
    pub errors: ErrorRecord,
    pub status: SubmissionStatus,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: FormRecord) -> Self {
        Self {
            record,
            ..Self::default()
        }
    }

    pub fn apply(self, action: FormAction) -> Self {
        match action {
            FormAction::Edit { field, value } => Self {
                record: self.record.with_value(field, value),
                errors: self.errors.without(field),
                status: self.status,
            },
            FormAction::SubmitBlocked(errors) => Self {
                errors,
                status: SubmissionStatus::Blocked,
                ..self
            },
            FormAction::SubmitStarted => {
                if self.status.is_loading() {
                    warn!("submission already in flight, ignoring");
                    return self;
                }
                Self {
                    errors: ErrorRecord::new(),
                    status: SubmissionStatus::InFlight,
                    ..self
                }
            }
            FormAction::SubmitSucceeded(body) => Self {
                status: SubmissionStatus::Completed(body),
                ..self
            },
            FormAction::SubmitFailed(message) => Self {
                status: SubmissionStatus::Failed(message),
                ..self
            },
        }
    }
}

//! Submit workflow: validate, coerce, post once, relay the answer.

use log::{debug, warn};

use super::result::PredictionResult;
use super::{PredictionTransport, SubmitError};
use crate::form::{validate, ErrorRecord, FormAction, FormState, SubmissionPayload};

/// Alert raised when the record fails validation.
pub const BLOCKED_ALERT: &str = "Please fix the errors in the form";

/// Caller-side reactions to the submit workflow.
pub trait SubmissionHooks {
    /// Show or hide the result surface
    fn open(&mut self, open: bool);
    /// Toggle the loading indicator
    fn loading(&mut self, loading: bool);
    /// Blocking notification
    fn alert(&mut self, message: &str);
    /// Prediction received
    fn output(&mut self, result: &PredictionResult);
    /// Submission failed after validation passed
    fn failure(&mut self, error: &SubmitError);
}

/// What a submit attempt ended in.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Blocked(ErrorRecord),
    Submitted(PredictionResult),
    Failed(SubmitError),
    AlreadyInFlight,
}

pub struct SubmissionOrchestrator<T> {
    transport: T,
    endpoint: String,
}

impl<T: PredictionTransport> SubmissionOrchestrator<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one submit attempt against `state`.
    ///
    /// Never returns an error: every failure is reported through `hooks`
    /// and reflected in the returned state and outcome.
    pub fn submit(
        &self,
        state: FormState,
        hooks: &mut dyn SubmissionHooks,
    ) -> (FormState, SubmissionOutcome) {
        if state.status.is_loading() {
            warn!("submit requested while a submission is in flight");
            return (state, SubmissionOutcome::AlreadyInFlight);
        }

        let errors = validate(&state.record);
        if !errors.is_empty() {
            debug!("submission blocked by {} field errors", errors.len());
            hooks.alert(BLOCKED_ALERT);
            let state = state.apply(FormAction::SubmitBlocked(errors.clone()));
            return (state, SubmissionOutcome::Blocked(errors));
        }

        let body = match SubmissionPayload::from_record(&state.record)
            .and_then(|payload| payload.to_json())
        {
            Ok(body) => body,
            Err(e) => {
                let error = SubmitError::Encode {
                    message: e.to_string(),
                };
                hooks.failure(&error);
                let state = state.apply(FormAction::SubmitFailed(error.to_string()));
                return (state, SubmissionOutcome::Failed(error));
            }
        };

        let state = state.apply(FormAction::SubmitStarted);
        hooks.open(true);
        hooks.loading(true);

        match self.transport.post_json(&self.endpoint, &body) {
            Ok(response) => {
                let result = PredictionResult::new(response);
                hooks.output(&result);
                hooks.loading(false);
                let state = state.apply(FormAction::SubmitSucceeded(result.body().clone()));
                (state, SubmissionOutcome::Submitted(result))
            }
            Err(error) => {
                warn!("submission to {} failed: {}", self.endpoint, error);
                hooks.loading(false);
                hooks.failure(&error);
                let state = state.apply(FormAction::SubmitFailed(error.to_string()));
                (state, SubmissionOutcome::Failed(error))
            }
        }
    }
}

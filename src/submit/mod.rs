//! Submission to the remote prediction service.
//!
//! The service is an opaque HTTP endpoint that accepts the coerced form
//! payload as JSON and answers with a JSON prediction. Nothing here retries:
//! a failed request is reported once and the user decides whether to submit
//! again.

pub mod client;
pub mod orchestrator;
pub mod result;

pub use client::{HttpTransport, TransportConfig};
pub use orchestrator::{SubmissionHooks, SubmissionOrchestrator, SubmissionOutcome};
pub use result::PredictionResult;

use serde_json::Value;
use thiserror::Error;

/// Default prediction endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://medicalback.mooo.com/predict";

/// Failure talking to the prediction service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// Connection, DNS, TLS or timeout failure
    #[error("could not reach {endpoint}: {message}")]
    Transport { endpoint: String, message: String },
    /// Service answered with a non-success status
    #[error("prediction service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// Response body was not valid JSON
    #[error("failed to decode prediction response: {message}")]
    Decode { message: String },
    /// Payload could not be serialized
    #[error("failed to encode submission payload: {message}")]
    Encode { message: String },
}

/// Something that can POST a JSON body and return the JSON answer.
pub trait PredictionTransport {
    fn post_json(&self, endpoint: &str, body: &Value) -> Result<Value, SubmitError>;
}

impl<T: PredictionTransport + ?Sized> PredictionTransport for &T {
    fn post_json(&self, endpoint: &str, body: &Value) -> Result<Value, SubmitError> {
        (**self).post_json(endpoint, body)
    }
}

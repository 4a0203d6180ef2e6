//! Prediction service response.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Opaque response body from the prediction service.
///
/// The body is kept verbatim. The known `heart` score is exposed for
/// display, but nothing else about the shape is assumed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PredictionResult {
    body: Value,
}

impl PredictionResult {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// The `heart` prediction, when the service returned one.
    pub fn heart_score(&self) -> Option<f64> {
        self.body.get("heart").and_then(Value::as_f64)
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.heart_score() {
            Some(score) => write!(f, "Heart prediction: {}", score),
            None => write!(f, "{}", self.body),
        }
    }
}

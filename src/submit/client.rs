//! HTTP transport for prediction requests.

use std::time::Duration;

use log::debug;
use serde_json::Value;

use super::{PredictionTransport, SubmitError};

/// Largest response body kept in a status error message.
const MAX_ERROR_BODY: usize = 512;

/// Timeouts for prediction requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds
    pub read_timeout_ms: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig {
            connect_timeout_ms: 10_000,
            read_timeout_ms: 60_000, // model inference can be slow
        }
    }
}

/// Blocking JSON-over-HTTP transport.
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_config(TransportConfig::default())
    }

    pub fn with_config(config: TransportConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_millis(config.connect_timeout_ms))
            .timeout_read(Duration::from_millis(config.read_timeout_ms))
            .timeout_write(Duration::from_millis(config.read_timeout_ms))
            .build();
        HttpTransport { agent }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionTransport for HttpTransport {
    fn post_json(&self, endpoint: &str, body: &Value) -> Result<Value, SubmitError> {
        let payload = serde_json::to_string(body).map_err(|e| SubmitError::Encode {
            message: e.to_string(),
        })?;
        debug!("POST {} ({} bytes)", endpoint, payload.len());

        let response = self
            .agent
            .post(endpoint)
            .set("Content-Type", "application/json")
            .set("Accept", "application/json")
            .send_string(&payload);

        match response {
            Ok(resp) => {
                let status = resp.status();
                let text = resp.into_string().map_err(|e| SubmitError::Decode {
                    message: e.to_string(),
                })?;
                debug!("HTTP {} ({} bytes)", status, text.len());
                parse_body(&text)
            }
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Err(SubmitError::Status {
                    status,
                    body: truncate(&body, MAX_ERROR_BODY),
                })
            }
            Err(ureq::Error::Transport(err)) => Err(SubmitError::Transport {
                endpoint: endpoint.to_string(),
                message: err.to_string(),
            }),
        }
    }
}

fn parse_body(text: &str) -> Result<Value, SubmitError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| SubmitError::Decode {
        message: e.to_string(),
    })
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

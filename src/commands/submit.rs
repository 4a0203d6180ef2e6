//! Submit command
//!
//! Validates the record, posts it once to the prediction service and
//! returns the report. Progress goes to stderr so stdout stays clean for
//! the formatted report.

use std::io::Write;

use log::debug;

use crate::config::AssessConfig;
use crate::engine::result::AssessmentReport;
use crate::form::FormRecord;
use crate::run_assessment;
use crate::submit::{HttpTransport, PredictionResult, SubmissionHooks, SubmitError};

/// Terminal reactions to the submit workflow.
pub struct CliHooks<W: Write> {
    out: W,
    quiet: bool,
    endpoint: String,
}

impl<W: Write> CliHooks<W> {
    pub fn new(out: W, quiet: bool, endpoint: impl Into<String>) -> Self {
        CliHooks {
            out,
            quiet,
            endpoint: endpoint.into(),
        }
    }

    fn say(&mut self, line: &str) {
        // Progress output is best effort.
        let _ = writeln!(self.out, "{}", line);
    }
}

impl<W: Write> SubmissionHooks for CliHooks<W> {
    fn open(&mut self, open: bool) {
        debug!("result surface open: {}", open);
    }

    fn loading(&mut self, loading: bool) {
        if loading && !self.quiet {
            let line = format!("Submitting assessment to {}...", self.endpoint);
            self.say(&line);
        }
    }

    fn alert(&mut self, message: &str) {
        self.say(message);
    }

    fn output(&mut self, result: &PredictionResult) {
        debug!("prediction received: {}", result.body());
    }

    fn failure(&mut self, error: &SubmitError) {
        if !self.quiet {
            let line = format!("Submission failed: {}", error);
            self.say(&line);
        }
    }
}

/// Run the submit command against the real HTTP transport.
pub fn run(config: &AssessConfig, record: FormRecord) -> AssessmentReport {
    let transport = HttpTransport::with_config(config.transport.clone());
    let mut hooks = CliHooks::new(std::io::stderr(), config.quiet, config.endpoint.clone());
    run_assessment(config, record, transport, &mut hooks)
}

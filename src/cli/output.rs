//! Output formatting for health-assess.
//!
//! Provides terminal and JSON report formatters. All formatters produce
//! valid output for any `AssessmentReport`, including an empty record.

use serde_json::{json, Map, Value};

use crate::cli::args::OutputFormat;
use crate::engine::result::{AssessmentReport, FieldStatus, ReportOutcome};
use crate::form::{Field, Section};
use crate::submit::orchestrator::BLOCKED_ALERT;

const RULE: &str =
    "--------------------------------------------------------------------------------";

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format an assessment report into a string
    fn format(&self, report: &AssessmentReport) -> String;
}

/// Terminal (human-readable) formatter
pub struct TerminalFormatter {
    color: bool,
    verbose: bool,
    quiet: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool, verbose: bool, quiet: bool) -> Self {
        TerminalFormatter {
            color,
            verbose,
            quiet,
        }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.colorize(text, "32")
    }

    fn yellow(&self, text: &str) -> String {
        self.colorize(text, "33")
    }

    fn red(&self, text: &str) -> String {
        self.colorize(text, "31")
    }

    fn gray(&self, text: &str) -> String {
        self.colorize(text, "90")
    }

    fn shows(&self, status: &FieldStatus) -> bool {
        match status {
            FieldStatus::Fail(_) => true,
            FieldStatus::Pass => !self.quiet,
            FieldStatus::Skip => self.verbose && !self.quiet,
        }
    }

    fn field_line(&self, report: &AssessmentReport, field: Field, status: &FieldStatus) -> String {
        let value = report.record.get(field);
        let (tag, detail) = match status {
            FieldStatus::Pass => (self.green("[PASS]"), value.to_string()),
            FieldStatus::Fail(message) => {
                let detail = if self.verbose && !value.is_empty() {
                    format!("{} - got '{}'", message, value)
                } else {
                    message.clone()
                };
                (self.red("[FAIL]"), detail)
            }
            FieldStatus::Skip => (self.gray("[SKIP]"), "not provided".to_string()),
        };
        format!("  {} {}: {} ({})\n", tag, field.key(), field.label(), detail)
    }

    fn outcome_line(&self, outcome: &ReportOutcome) -> String {
        match outcome {
            ReportOutcome::Valid => self.green("Result: record is valid"),
            ReportOutcome::Blocked => self.red(&format!("Result: {}", BLOCKED_ALERT)),
            ReportOutcome::Submitted(result) => self.green(&format!("Result: {}", result)),
            ReportOutcome::Failed(error) => {
                self.yellow(&format!("Result: submission failed: {}", error))
            }
            ReportOutcome::InFlight => {
                self.yellow("Result: a submission is already in flight")
            }
        }
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, report: &AssessmentReport) -> String {
        let mut output = String::new();

        // Header
        if !self.quiet {
            output.push_str(RULE);
            output.push('\n');
            output.push_str("health-assess report\n");
            if let Some(ref endpoint) = report.endpoint {
                output.push_str(&format!("Endpoint: {}\n", endpoint));
            }
            output.push_str(&format!("Timestamp: {}\n", report.timestamp.to_rfc3339()));
            output.push_str(RULE);
            output.push_str("\n\n");
        }

        for section in Section::ALL {
            let lines: Vec<String> = section
                .fields()
                .map(|field| (field, report.field_status(field)))
                .filter(|(_, status)| self.shows(status))
                .map(|(field, status)| self.field_line(report, field, &status))
                .collect();

            if lines.is_empty() {
                continue;
            }

            output.push_str(&format!("{}\n", section.title().to_uppercase()));
            for line in lines {
                output.push_str(&line);
            }
            output.push('\n');
        }

        // Summary
        let summary = report.summary();
        output.push_str(RULE);
        output.push('\n');
        output.push_str(&format!(
            "SUMMARY: {} passed, {} failed, {} skipped\n",
            summary.passed, summary.failed, summary.skipped
        ));
        output.push_str(&self.outcome_line(&report.outcome));
        output.push('\n');
        output.push_str(&format!(
            "Exit code: {} ({})\n",
            report.exit_code(),
            report.outcome.label()
        ));
        output.push_str(RULE);

        output
    }
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }

    pub fn to_value(report: &AssessmentReport) -> Value {
        let summary = report.summary();

        let fields: Vec<Value> = Field::ALL
            .iter()
            .map(|&field| {
                let (status, message) = match report.field_status(field) {
                    FieldStatus::Pass => ("pass", None),
                    FieldStatus::Fail(message) => ("fail", Some(message)),
                    FieldStatus::Skip => ("skip", None),
                };
                json!({
                    "key": field.key(),
                    "label": field.label(),
                    "section": field.section().title(),
                    "value": report.record.get(field),
                    "status": status,
                    "message": message,
                })
            })
            .collect();

        let mut outcome = Map::new();
        outcome.insert("status".into(), json!(report.outcome.label()));
        match &report.outcome {
            ReportOutcome::Submitted(result) => {
                outcome.insert("response".into(), result.body().clone());
            }
            ReportOutcome::Failed(error) => {
                outcome.insert("error".into(), json!(error.to_string()));
            }
            ReportOutcome::Blocked => {
                outcome.insert("alert".into(), json!(BLOCKED_ALERT));
            }
            ReportOutcome::Valid | ReportOutcome::InFlight => {}
        }

        json!({
            "timestamp": report.timestamp.to_rfc3339(),
            "endpoint": report.endpoint,
            "summary": {
                "passed": summary.passed,
                "failed": summary.failed,
                "skipped": summary.skipped,
                "total": summary.total,
            },
            "errors": report.errors,
            "fields": fields,
            "outcome": Value::Object(outcome),
            "exit_code": report.exit_code(),
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &AssessmentReport) -> String {
        let value = Self::to_value(report);
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        // Serializing a `Value` cannot fail; fall back to compact Display.
        rendered.unwrap_or_else(|_| value.to_string())
    }
}

/// Get the appropriate formatter for the output format
pub fn get_formatter(
    format: OutputFormat,
    color: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TerminalFormatter::new(color, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}

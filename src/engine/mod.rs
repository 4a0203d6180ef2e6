//! Assessment engine: runs the form workflow and collects the report.

pub mod result;

pub use result::{AssessmentReport, FieldStatus, ReportOutcome, ReportSummary};

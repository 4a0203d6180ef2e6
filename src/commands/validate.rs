//! Validate command
//!
//! Checks the record against every field rule without contacting the
//! prediction service.

use crate::check_record;
use crate::engine::result::AssessmentReport;
use crate::form::FormRecord;

/// Run the validate command
pub fn run(record: FormRecord) -> AssessmentReport {
    check_record(record)
}

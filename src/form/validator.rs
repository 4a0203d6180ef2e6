//! Record validation.
//!
//! Validation is a pure function of the record: every field is checked
//! against its [`FieldRule`](super::rules::FieldRule) and the failures are
//! collected into an [`ErrorRecord`].

use super::field::Field;
use super::record::{ErrorRecord, FormRecord};
use super::rules::rule_for;
use log::debug;

/// Validate one field in the context of the whole record.
pub fn validate_field(record: &FormRecord, field: Field) -> Option<String> {
    let rule = rule_for(field);
    if !rule.applies(record) {
        return None;
    }

    let raw = record.get(field);
    if raw.trim().is_empty() {
        return rule
            .is_required(record)
            .then(|| rule.message.to_string());
    }

    if rule.constraint.accepts(raw) {
        None
    } else {
        Some(rule.message.to_string())
    }
}

/// Validate every field.
pub fn validate(record: &FormRecord) -> ErrorRecord {
    let mut errors = ErrorRecord::new();
    for field in Field::ALL {
        if let Some(message) = validate_field(record, field) {
            errors.insert(field, message);
        }
    }
    debug!(
        "validated {} filled fields, {} errors",
        record.len(),
        errors.len()
    );
    errors
}

pub fn is_valid(record: &FormRecord) -> bool {
    validate(record).is_empty()
}

//! Command handlers for health-assess
//!
//! This module contains implementations for all health-assess commands:
//! - `submit`: Validate and post the record to the prediction service
//! - `validate`: Validate the record without posting
//! - `fields`: List every field with its rule
//! - `describe`: Show the help text for one field
//! - `fill`: Prompt for each field interactively

pub mod describe;
pub mod fields;
pub mod fill;
pub mod submit;
pub mod validate;

use std::fs;
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::form::FormRecord;
use crate::AssessError;

/// Build the starting record from an optional JSON file plus `--set` pairs.
///
/// Pairs are applied after the file, so they override it.
pub fn load_record(
    input: Option<&Path>,
    sets: &[(String, String)],
) -> Result<FormRecord, AssessError> {
    let record = match input {
        Some(path) => read_record_file(path)?,
        None => FormRecord::new(),
    };
    let record = record.with_pairs(sets.iter().map(|(k, v)| (k.as_str(), v.clone())))?;

    debug!("loaded record with {} filled fields", record.len());
    Ok(record)
}

fn read_record_file(path: &Path) -> Result<FormRecord, AssessError> {
    let text = fs::read_to_string(path).map_err(|source| AssessError::Io {
        context: format!("reading {}", path.display()),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|e| AssessError::Parse {
        context: path.display().to_string(),
        message: e.to_string(),
    })?;
    FormRecord::from_json(&value)
}

//! Network-ready projection of a form record.

use super::field::Field;
use super::record::FormRecord;
use super::rules::{parse_number, rule_for, BlankDefault};
use crate::AssessError;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

/// Largest integer an `f64` represents exactly.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, PartialEq)]
pub enum PayloadValue {
    Number(f64),
    Text(String),
    /// Unfilled optional field, sent as `""`
    Blank,
}

impl Serialize for PayloadValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PayloadValue::Number(n) if n.fract() == 0.0 && n.abs() < MAX_EXACT_INT => {
                serializer.serialize_i64(*n as i64)
            }
            PayloadValue::Number(n) => serializer.serialize_f64(*n),
            PayloadValue::Text(s) => serializer.serialize_str(s),
            PayloadValue::Blank => serializer.serialize_str(""),
        }
    }
}

/// Every field with its coerced value, in form order.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPayload {
    entries: Vec<(Field, PayloadValue)>,
}

impl SubmissionPayload {
    /// Coerce a record. Call only on records that passed validation; a
    /// numeric field that still fails to parse is reported as an error.
    pub fn from_record(record: &FormRecord) -> Result<Self, AssessError> {
        let mut entries = Vec::with_capacity(Field::ALL.len());
        for field in Field::ALL {
            let rule = rule_for(field);
            let raw = record.get(field);

            let value = if raw.trim().is_empty() || !rule.applies(record) {
                match rule.blank_default {
                    BlankDefault::Zero => PayloadValue::Number(0.0),
                    BlankDefault::Empty => PayloadValue::Blank,
                }
            } else if rule.is_numeric() {
                let n = parse_number(raw).ok_or_else(|| AssessError::Coercion {
                    field: field.key().to_string(),
                    value: raw.to_string(),
                })?;
                PayloadValue::Number(n)
            } else {
                PayloadValue::Text(raw.to_string())
            };
            entries.push((field, value));
        }
        Ok(Self { entries })
    }

    pub fn get(&self, field: Field) -> Option<&PayloadValue> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Result<Value, AssessError> {
        serde_json::to_value(self).map_err(|e| AssessError::Parse {
            context: "payload".to_string(),
            message: e.to_string(),
        })
    }
}

impl Serialize for SubmissionPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, value) in &self.entries {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}

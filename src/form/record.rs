//! Form values and per-field error messages.

use super::field::Field;
use crate::AssessError;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Raw user input keyed by field. An absent entry means "unfilled".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRecord {
    values: BTreeMap<Field, String>,
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw value, or `""` when unfilled.
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn is_filled(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    /// Return a record with `field` replaced. A blank or whitespace-only
    /// value clears it.
    pub fn with_value(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            self.values.remove(&field);
        } else {
            self.values.insert(field, value);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build a record from a JSON object of key to string, number or null.
    pub fn from_json(value: &Value) -> Result<Self, AssessError> {
        let object = value.as_object().ok_or_else(|| AssessError::Parse {
            context: "record".to_string(),
            message: "expected a JSON object".to_string(),
        })?;

        let mut record = FormRecord::new();
        for (key, raw) in object {
            let field = Field::from_key(key).ok_or_else(|| AssessError::UnknownField {
                key: key.clone(),
            })?;
            let text = match raw {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Null => String::new(),
                other => {
                    return Err(AssessError::Parse {
                        context: format!("field '{}'", key),
                        message: format!("expected string or number, got {}", other),
                    })
                }
            };
            record = record.with_value(field, text);
        }
        Ok(record)
    }

    /// Build a record from `key=value` style pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self, AssessError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        FormRecord::new().with_pairs(pairs)
    }

    /// Apply `key=value` pairs on top of this record, later pairs winning.
    pub fn with_pairs<K, V, I>(self, pairs: I) -> Result<Self, AssessError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .try_fold(self, |record, (key, value)| {
                let field = Field::from_key(key.as_ref()).ok_or_else(|| {
                    AssessError::UnknownField {
                        key: key.as_ref().to_string(),
                    }
                })?;
                Ok(record.with_value(field, value))
            })
    }
}

impl Serialize for FormRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

/// Validation messages keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorRecord {
    messages: BTreeMap<Field, String>,
}

impl ErrorRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.messages.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Same record minus `field`'s entry.
    pub fn without(mut self, field: Field) -> Self {
        self.messages.remove(&field);
        self
    }
}

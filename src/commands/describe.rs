//! Describe command
//!
//! Prints the "What's this?" help text for a field. Unknown keys are not an
//! error: the key is echoed back with "no description".

use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::form::{describe, Field};

/// Run the describe command
pub fn run(key: &str, format: OutputFormat) -> String {
    let field = Field::from_key(key);
    let description = describe(key);

    match format {
        OutputFormat::Json => json!({
            "key": key,
            "label": field.map(|f| f.label()),
            "description": description,
        })
        .to_string(),
        OutputFormat::Text => match (field, description) {
            (Some(field), Some(text)) => format!("{} ({})\n  {}", field.label(), key, text),
            _ => format!("{}: no description", key),
        },
    }
}

//! Fields command
//!
//! Lists every form field grouped by section with its widget and rule.

use serde_json::{json, Value};

use crate::cli::args::OutputFormat;
use crate::form::{descriptor, rule_for, Field, Section};

/// Run the fields command
pub fn run(format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(),
        OutputFormat::Text => format_text(),
    }
}

fn format_text() -> String {
    let mut output = String::from("Form fields:\n");

    for section in Section::ALL {
        output.push('\n');
        output.push_str(&format!("{}\n", section.title().to_uppercase()));
        for field in section.fields() {
            output.push_str(&format!(
                "  {:<28} {:<38} {:<7} {}\n",
                field.key(),
                field.label(),
                field.widget().to_string(),
                rule_for(field).summary()
            ));
        }
    }

    output
}

fn format_json() -> String {
    let fields: Vec<Value> = Field::ALL
        .iter()
        .map(|&field| {
            let mut entry = json!(descriptor(field));
            entry["rule"] = json!(rule_for(field).summary());
            entry["message"] = json!(rule_for(field).message);
            entry
        })
        .collect();
    let value = Value::Array(fields);
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

//! Fill command
//!
//! Walks the form field by field on a line-oriented terminal. Each answer
//! is validated as it is entered, so the finished record only fails on
//! fields the user chose to leave for later.
//!
//! Input conventions:
//! - `?` prints the field description
//! - an empty line keeps the current value (or leaves an optional field blank)
//! - options match case-insensitively and are stored in canonical spelling
//! - end of input stops prompting and returns what was entered so far

use std::io::{BufRead, Write};

use crate::form::rules::rule_for;
use crate::form::{validate_field, Field, FormRecord, WidgetKind};
use crate::AssessError;

/// Prompt for every applicable field, starting from `record`.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    mut record: FormRecord,
) -> Result<FormRecord, AssessError> {
    let mut section = None;

    for field in Field::ALL {
        // Gated fields are decided by answers given earlier in the walk.
        if !rule_for(field).applies(&record) {
            continue;
        }

        if section != Some(field.section()) {
            section = Some(field.section());
            write_line(&mut output, &format!("\n{}", field.section().title()))?;
        }

        match prompt_field(&mut input, &mut output, &record, field)? {
            Answer::Value(value) => record = record.with_value(field, value),
            Answer::Keep => {}
            Answer::Eof => {
                write_line(&mut output, "")?;
                return Ok(record);
            }
        }
    }

    Ok(record)
}

enum Answer {
    Value(String),
    Keep,
    Eof,
}

fn prompt_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    record: &FormRecord,
    field: Field,
) -> Result<Answer, AssessError> {
    let rule = rule_for(field);

    loop {
        write_prompt(output, record, field)?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(|source| AssessError::Io {
            context: "reading answer".to_string(),
            source,
        })?;
        if read == 0 {
            return Ok(Answer::Eof);
        }
        let answer = line.trim();

        if answer == "?" {
            write_line(output, &format!("  {}", field.description()))?;
            continue;
        }

        if answer.is_empty() {
            if record.is_filled(field) || !rule.is_required(record) {
                return Ok(Answer::Keep);
            }
            write_line(output, &format!("  {}", rule.message))?;
            continue;
        }

        let value = match field.widget() {
            WidgetKind::Number => answer.to_string(),
            WidgetKind::Select | WidgetKind::Radio => match field.match_option(answer) {
                Some(option) => option.to_string(),
                None => {
                    write_line(output, &format!("  {}", rule.message))?;
                    write_line(output, &format!("  Options: {}", field.options().join(", ")))?;
                    continue;
                }
            },
        };

        let candidate = record.clone().with_value(field, value.clone());
        match validate_field(&candidate, field) {
            Some(message) => write_line(output, &format!("  {}", message))?,
            None => return Ok(Answer::Value(value)),
        }
    }
}

fn write_prompt<W: Write>(output: &mut W, record: &FormRecord, field: Field) -> Result<(), AssessError> {
    let hint = match field.widget() {
        WidgetKind::Number => field.placeholder().unwrap_or("").to_string(),
        WidgetKind::Select | WidgetKind::Radio => field.options().join("/"),
    };
    let current = record.get(field);
    let text = if current.is_empty() {
        format!("{} [{}]: ", field.label(), hint)
    } else {
        format!("{} [{}] ({}): ", field.label(), hint, current)
    };
    output
        .write_all(text.as_bytes())
        .and_then(|_| output.flush())
        .map_err(write_error)
}

fn write_line<W: Write>(output: &mut W, text: &str) -> Result<(), AssessError> {
    writeln!(output, "{}", text).map_err(write_error)
}

fn write_error(source: std::io::Error) -> AssessError {
    AssessError::Io {
        context: "writing prompt".to_string(),
        source,
    }
}

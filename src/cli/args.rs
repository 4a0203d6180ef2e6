//! Command line arguments for health-assess.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

impl OutputFormat {
    /// Parse a format name from config or environment.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown output format: '{}'. Valid formats: text, json",
                s
            )),
        }
    }
}

/// Command to execute
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Validate the record and submit it for prediction (default)
    Submit,
    /// Validate the record without submitting
    Validate,
    /// List every form field with its rule
    Fields,
    /// Show the "What's this?" description for a field
    Describe {
        /// Field key, e.g. systolicBP
        #[arg(value_name = "FIELD")]
        field: String,
    },
    /// Fill the form interactively, then submit
    Fill {
        /// Validate only, do not submit after filling
        #[arg(long)]
        no_submit: bool,
    },
    /// Print version information
    Version,
}

/// Parsed command line arguments
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "health-assess",
    version,
    about = "Health assessment form: validate a record and submit it for prediction",
    after_help = "EXIT CODES:\n    0   Record valid (or submitted)\n    1   Validation errors, nothing submitted\n    2   Submission failed\n    3   Runtime error\n\n\
EXAMPLES:\n    health-assess --input record.json\n    health-assess validate --input record.json --set age=52\n    health-assess describe sleepQuality\n    health-assess fill --endpoint http://localhost:5000/predict"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON file with the form record (key to string or number)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Set one field, applied after --input (repeatable)
    #[arg(
        long = "set",
        global = true,
        value_name = "FIELD=VALUE",
        value_parser = parse_assignment
    )]
    pub sets: Vec<(String, String)>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only output errors and the outcome
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Include every field and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Prediction endpoint URL
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Read timeout in milliseconds
    #[arg(long = "timeout", global = true, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Configuration file path (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Selected command, defaulting to `submit`.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Submit)
    }
}

/// Parse `FIELD=VALUE`. The value may be empty and may contain `=`.
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing field name in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

//! health-assess CLI entry point
//!
//! Validates an assessment record and submits it for prediction.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use health_assess::check_record;
use health_assess::cli::args::{Args, Command};
use health_assess::cli::output::get_formatter;
use health_assess::commands::{self, describe, fields, fill, submit, validate};
use health_assess::config::AssessConfig;
use health_assess::engine::result::AssessmentReport;
use health_assess::version::{self, get_build_info};
use health_assess::AssessError;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(3),
            };
        }
    };

    init_logging(args.verbose);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(3)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> Result<ExitCode, AssessError> {
    let mut config = AssessConfig::load(args)?;
    if !io::stdout().is_terminal() {
        config.color = false;
    }

    match args.command() {
        Command::Version => {
            println!("{}", version::render(&get_build_info(), config.format));
            Ok(ExitCode::SUCCESS)
        }
        Command::Fields => {
            println!("{}", fields::run(config.format));
            Ok(ExitCode::SUCCESS)
        }
        Command::Describe { field } => {
            println!("{}", describe::run(&field, config.format));
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate => {
            let record = commands::load_record(args.input.as_deref(), &args.sets)?;
            Ok(print_report(&config, &validate::run(record)))
        }
        Command::Submit => {
            let record = commands::load_record(args.input.as_deref(), &args.sets)?;
            Ok(print_report(&config, &submit::run(&config, record)))
        }
        Command::Fill { no_submit } => {
            let start = commands::load_record(args.input.as_deref(), &args.sets)?;
            let stdin = io::stdin();
            let record = fill::run(stdin.lock(), io::stderr(), start)?;
            let report = if no_submit {
                check_record(record)
            } else {
                submit::run(&config, record)
            };
            Ok(print_report(&config, &report))
        }
    }
}

fn print_report(config: &AssessConfig, report: &AssessmentReport) -> ExitCode {
    let formatter = get_formatter(config.format, config.color, config.verbose, config.quiet);
    println!("{}", formatter.format(report));
    ExitCode::from(report.exit_code())
}

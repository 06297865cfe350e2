//! Command-line front end: validate personal-data strings.
//!
//! ```text
//! datavalid email user@example.com
//! datavalid --format json date 29/02/2024
//! datavalid record person.json
//! datavalid demo
//! ```
//!
//! Exit codes: `0` valid, `1` invalid, `2` usage or I/O failure.

mod config;
mod logging;
mod output;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use datavalid_validator::foundation::FieldValidator;
use datavalid_validator::validators::{Date, Email, Phone, Url};
use datavalid_validator::{Field, Outcome, PersonalRecord, validate_record_with};

use crate::config::{CliConfig, LeapYearsArg, OutputFormat};

const EXIT_INVALID: u8 = 1;
const EXIT_FAILURE: u8 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "datavalid",
    version,
    about = "Validate email addresses, Nigerian phone numbers, DD/MM/YYYY dates and URLs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (overrides config and DATAVALID_FORMAT).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Path to a TOML config file.
    #[arg(long, global = true, env = "DATAVALID_CONFIG")]
    config: Option<PathBuf>,

    /// Leap-year rule for dates.
    #[arg(long, global = true, value_enum)]
    leap_years: Option<LeapYearsArg>,

    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Args)]
struct ValueArg {
    /// The text to validate.
    value: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate an email address.
    Email(ValueArg),
    /// Validate a phone number (08012345678 or +2348012345678).
    Phone(ValueArg),
    /// Validate a DD/MM/YYYY date.
    Date(ValueArg),
    /// Validate a URL.
    Url(ValueArg),
    /// Validate a JSON record with email, phone, date_of_birth and website fields.
    Record {
        /// JSON file to read; stdin when omitted.
        path: Option<PathBuf>,
    },
    /// Run the built-in sample inputs.
    Demo,
}

/// Sample inputs covering each validator's accept and reject paths.
const DEMO_INPUTS: [(Field, &str); 13] = [
    (Field::Email, "user@example.com"),
    (Field::Email, "invalid-email.com"),
    (Field::Phone, "+2348012345678"),
    (Field::Phone, "08012345678"),
    (Field::Phone, "081 234 5678"),
    (Field::Date, "31/01/2024"),
    (Field::Date, "30/02/2024"),
    (Field::Date, "29/02/2024"),
    (Field::Date, "31/04/2025"),
    (Field::Url, "https://www.google.com"),
    (Field::Url, "http://example.org"),
    (Field::Url, "www.example.net"),
    (Field::Url, "htp://invalid.com"),
];

fn resolve_config(cli: &Cli) -> anyhow::Result<CliConfig> {
    let mut config = config::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(leap_years) = cli.leap_years {
        config.leap_years = leap_years.into();
    }
    Ok(config)
}

fn check(field: Field, value: &str, config: &CliConfig) -> Outcome {
    match field {
        Field::Email => Email::new().check(value),
        Field::Phone => Phone::new().check(value),
        Field::Date => Date::new().with_leap_rule(config.leap_years).check(value),
        Field::Url => Url::new().check(value),
    }
}

fn read_record(path: Option<&Path>) -> anyhow::Result<PersonalRecord> {
    let json = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading record file");
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read record from stdin")?;
            buf
        }
    };

    Ok(PersonalRecord::from_json(&json)?)
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = resolve_config(&cli)?;
    logging::init(&config.log_level, cli.verbose)?;
    tracing::debug!(?config, "configuration resolved");

    let single = |field: Field, arg: &ValueArg| -> anyhow::Result<bool> {
        let outcome = check(field, &arg.value, &config);
        output::outcome(config.format, &outcome)?;
        Ok(outcome.is_valid())
    };

    match &cli.command {
        Command::Email(arg) => single(Field::Email, arg),
        Command::Phone(arg) => single(Field::Phone, arg),
        Command::Date(arg) => single(Field::Date, arg),
        Command::Url(arg) => single(Field::Url, arg),
        Command::Record { path } => {
            let record = read_record(path.as_deref())?;
            let report = validate_record_with(&record, Date::new().with_leap_rule(config.leap_years));
            tracing::info!(
                fields = report.outcomes().len(),
                valid = report.is_valid(),
                "record validated"
            );
            output::report(config.format, &report)?;
            Ok(report.is_valid())
        }
        Command::Demo => {
            let rows: Vec<(&str, Outcome)> = DEMO_INPUTS
                .iter()
                .map(|&(field, input)| (input, check(field, input, &config)))
                .collect();
            output::demo(config.format, &rows)?;
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_INVALID),
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

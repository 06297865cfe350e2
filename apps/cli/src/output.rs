//! Result rendering for stdout.

use std::io::{self, Write};

use datavalid_validator::{Outcome, RecordReport};
use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Serialize)]
struct DemoRow<'a> {
    input: &'a str,
    #[serde(flatten)]
    outcome: &'a Outcome,
}

fn json<T: Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Prints a single field result.
pub fn outcome(format: OutputFormat, outcome: &Outcome) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => writeln!(out, "{outcome}")?,
        OutputFormat::Json => json(&mut out, outcome)?,
    }
    Ok(())
}

/// Prints one line per present record field, then the overall verdict.
pub fn report(format: OutputFormat, report: &RecordReport) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => {
            for outcome in report.outcomes() {
                writeln!(out, "{}: {outcome}", outcome.field().key())?;
            }
            let verdict = if report.is_valid() { "valid" } else { "invalid" };
            writeln!(out, "record: {verdict}")?;
        }
        OutputFormat::Json => json(&mut out, report)?,
    }
    Ok(())
}

/// Prints the demo table.
pub fn demo(format: OutputFormat, rows: &[(&str, Outcome)]) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => {
            for (input, outcome) in rows {
                writeln!(out, "{:<5} {input:?} -> {outcome}", outcome.field().key())?;
            }
        }
        OutputFormat::Json => {
            let rows: Vec<DemoRow<'_>> = rows
                .iter()
                .map(|(input, outcome)| DemoRow { input, outcome })
                .collect();
            json(&mut out, &rows)?;
        }
    }
    Ok(())
}

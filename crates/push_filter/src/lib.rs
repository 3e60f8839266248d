//! Push Filter Library
//!
//! Reads a system profile and a batch of pushes in the line protocol,
//! evaluates every push and renders the matching texts.

pub mod reader;

use anyhow::{Context, Result};
use push_core::{evaluate, Evaluation, PushError};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

pub use reader::{PushInput, PushReader};

/// Exit status for I/O and other runtime failures
pub const EXIT_FAILURE: i32 = 1;
/// Exit status when the input violates the protocol
pub const EXIT_INPUT_ERROR: i32 = 2;

/// Map a failed run to its process exit status
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PushError>() {
        Some(push_err) if push_err.is_input_error() => EXIT_INPUT_ERROR,
        _ => EXIT_FAILURE,
    }
}

/// How matches are written to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// One matched text per line, `-1` when nothing matched
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

/// JSON report of one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterReport {
    /// Matched texts in input order
    pub matched: Vec<String>,
    /// Number of pushes evaluated
    pub total: usize,
    pub matched_count: usize,
}

impl From<&Evaluation> for FilterReport {
    fn from(evaluation: &Evaluation) -> Self {
        Self {
            matched: evaluation.matched.clone(),
            total: evaluation.total,
            matched_count: evaluation.matched_count(),
        }
    }
}

/// Read the whole transcript and evaluate it.
///
/// Nothing is written until the input has been fully read and validated.
pub fn filter<R: BufRead>(input: R) -> Result<Evaluation> {
    let mut reader = PushReader::new(input);
    let PushInput { system, pushes } = reader
        .read_input()
        .with_context(|| format!("Invalid input near line {}", reader.line_no()))?;
    Ok(evaluate(&system, &pushes))
}

pub fn write_evaluation<W: Write>(
    evaluation: &Evaluation,
    out: &mut W,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in evaluation.lines() {
                writeln!(out, "{}", line).context("Failed to write output")?;
            }
        }
        OutputFormat::Json => {
            let report = FilterReport::from(evaluation);
            serde_json::to_writer_pretty(&mut *out, &report)
                .context("Failed to serialize report")?;
            writeln!(out).context("Failed to write output")?;
        }
    }
    out.flush().context("Failed to flush output")?;
    Ok(())
}

/// Full input → output transform
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W, format: OutputFormat) -> Result<Evaluation> {
    let evaluation = filter(input)?;
    write_evaluation(&evaluation, out, format)?;
    Ok(evaluation)
}

//! Sum command: parse every token and print the total.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;

/// Sums `tokens` and writes the outcome to `writer`.
///
/// A bad token is reported on the same writer as a normal result and turns
/// into a failing exit code; only I/O failures surface as errors.
pub fn run<W: Write>(writer: &mut W, tokens: &[String], json: bool) -> Result<ExitCode> {
    match timesum_core::sum(tokens) {
        Ok(total) => {
            tracing::debug!(tokens = tokens.len(), minutes = total.minutes(), "summed");
            if json {
                writeln!(writer, "{}", serde_json::to_string(&total)?)?;
            } else {
                writeln!(writer, "{total}")?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            writeln!(writer, "! {err}")?;
            Ok(ExitCode::FAILURE)
        }
    }
}

use crate::config::settings::Settings;
use crate::core::{ConfigProvider, OutputFormat, Report};
use crate::utils::error::Result;
use std::io::Write;

/// Runs every exercise in `settings` and writes the results to `out`.
///
/// Text output is written line by line as each exercise finishes, so a
/// failing exercise still leaves earlier lines in `out`. JSON output is a
/// single object written once everything has succeeded.
pub fn run_and_print<W: Write>(settings: &Settings, out: &mut W) -> Result<Report> {
    let runner = settings.runner();

    match settings.output_format() {
        OutputFormat::Text => {
            let mut write_error = None;
            let result = runner.run_with(|line| {
                if write_error.is_none() {
                    if let Err(e) = writeln!(out, "{}", line) {
                        write_error = Some(e);
                    }
                }
            });
            if let Some(e) = write_error {
                return Err(e.into());
            }
            result
        }
        OutputFormat::Json => {
            let report = runner.run_with(|_| {})?;
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
            Ok(report)
        }
    }
}

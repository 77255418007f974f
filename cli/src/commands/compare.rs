use crate::output::{json, text};
use crate::OutputFormat;
use anyhow::{Context, Result};
use handler_diff::{compare_sources, write_report, CompareConfig, ComparisonReport, SourceText};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

pub fn run(
    old_path: &str,
    new_path: &str,
    report_path: &str,
    format: OutputFormat,
    no_exclusions: bool,
) -> Result<ExitCode> {
    let config = if no_exclusions {
        CompareConfig::unfiltered()
    } else {
        CompareConfig::default()
    };

    let old = SourceText::load(old_path)
        .with_context(|| format!("Failed to read old handler source: {}", old_path))?;
    let new = SourceText::load(new_path)
        .with_context(|| format!("Failed to read new handler source: {}", new_path))?;

    let report = compare_sources(&old, &new, &config);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match format {
        OutputFormat::Text => text::write_signature_diff(&mut handle, &report)?,
        OutputFormat::Json => json::write_json_report(&mut handle, &report)?,
    }

    // Created or truncated at run start; empty when no matched bodies differ.
    let file = File::create(report_path)
        .with_context(|| format!("Failed to create report file: {}", report_path))?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, &report)
        .with_context(|| format!("Failed to write report file: {}", report_path))?;
    writer.flush()?;

    Ok(exit_code_from_report(&report))
}

fn exit_code_from_report(report: &ComparisonReport) -> ExitCode {
    if report.has_differences() {
        ExitCode::from(1)
    } else {
        ExitCode::from(0)
    }
}

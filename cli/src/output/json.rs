use anyhow::Result;
use handler_diff::{serialize_report, ComparisonReport};
use std::io::Write;

pub fn write_json_report<W: Write>(w: &mut W, report: &ComparisonReport) -> Result<()> {
    let json = serialize_report(report)?;
    writeln!(w, "{}", json)?;
    Ok(())
}

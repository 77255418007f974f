use anyhow::Result;
use handler_diff::ComparisonReport;
use std::io::Write;

/// Print the symmetric difference of the signature lists, one per line.
/// No header and no summary; an empty difference prints nothing.
pub fn write_signature_diff<W: Write>(w: &mut W, report: &ComparisonReport) -> Result<()> {
    for signature in &report.missing {
        writeln!(w, "{}", signature)?;
    }
    Ok(())
}

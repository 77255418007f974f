//! Comparison pipeline and report rendering.
//!
//! `compare_sources` runs the whole single-pass pipeline: extraction on
//! both sides, symmetric difference of the sorted signature lists, body
//! capture, matching, and a line diff per matched handler whose bodies
//! are not identical. The result is immutable; rendering to the report
//! file happens separately in [`write_report`].

use std::io::{self, Write};

use serde::Serialize;

use crate::body::extract_bodies;
use crate::config::CompareConfig;
use crate::line_diff::{diff_lines, DiffLine};
use crate::matching::{find_body, match_signatures};
use crate::set_diff::symmetric_diff;
use crate::signature::{extract_signatures, ExclusionSet, Signature};
use crate::source::SourceText;

/// One matched handler whose two bodies differ, with the unified line
/// diff between them. Identical matched pairs produce no entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffEntry {
    pub signature: Signature,
    pub lines: Vec<DiffLine>,
}

/// Everything one comparison run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonReport {
    /// Display path of side A.
    pub path_a: String,
    /// Display path of side B.
    pub path_b: String,
    /// Signatures present on exactly one side, A side first, each side in
    /// sorted order.
    pub missing: Vec<Signature>,
    /// Matched handlers with differing bodies, in side A order.
    pub entries: Vec<DiffEntry>,
}

impl ComparisonReport {
    pub fn has_differences(&self) -> bool {
        !self.missing.is_empty() || !self.entries.is_empty()
    }
}

/// Compare two handler sources.
pub fn compare_sources(a: &SourceText, b: &SourceText, config: &CompareConfig) -> ComparisonReport {
    let sigs_a = extract_signatures(a, &ExclusionSet::empty());
    let sigs_b = extract_signatures(b, &config.b_exclusions);

    let mut sorted_a = sigs_a.clone();
    let mut sorted_b = sigs_b.clone();
    sorted_a.sort();
    sorted_b.sort();
    let missing = symmetric_diff(&sorted_a, &sorted_b);

    let bodies_a = extract_bodies(a, &sigs_a);
    let bodies_b = extract_bodies(b, &sigs_b);

    let matched = match_signatures(&sigs_a, &sigs_b, &bodies_a, &bodies_b);

    let mut entries = Vec::new();
    for signature in matched {
        // Matching guarantees both lookups succeed.
        let Some(body_a) = find_body(&bodies_a, &signature) else {
            continue;
        };
        let Some(body_b) = find_body(&bodies_b, &signature) else {
            continue;
        };

        if body_a.trimmed() == body_b.trimmed() {
            continue;
        }

        entries.push(DiffEntry {
            lines: diff_lines(body_a.trimmed(), body_b.trimmed()),
            signature,
        });
    }

    ComparisonReport {
        path_a: a.path().display().to_string(),
        path_b: b.path().display().to_string(),
        missing,
        entries,
    }
}

/// Write the body-diff blocks to the report destination.
///
/// Each block is the literal line `Function: <signature>`, the unified
/// diff lines, and one blank separator line. A report with no entries
/// writes nothing, leaving the destination empty.
pub fn write_report<W: Write>(w: &mut W, report: &ComparisonReport) -> io::Result<()> {
    for entry in &report.entries {
        writeln!(w, "Function: {}", entry.signature)?;
        for line in &entry.lines {
            writeln!(w, "{}", line.render())?;
        }
        writeln!(w)?;
    }
    Ok(())
}

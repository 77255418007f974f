//! Line-level diff between two matched handler bodies.
//!
//! An O(n*m) longest-common-subsequence pass over the body lines, small
//! enough for handler-sized inputs that no work limit is needed. The walk
//! resolves ties by consuming the old side first, so output is
//! deterministic for a given pair of bodies.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeTag {
    /// Line present on both sides.
    Context,
    /// Line present only in the old body.
    Removed,
    /// Line present only in the new body.
    Added,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    pub tag: ChangeTag,
    pub text: String,
}

impl DiffLine {
    fn new(tag: ChangeTag, text: &str) -> Self {
        Self {
            tag,
            text: text.to_string(),
        }
    }

    /// Unified-diff rendering: `-`, `+`, or a space, followed by the line.
    pub fn render(&self) -> String {
        let prefix = match self.tag {
            ChangeTag::Context => ' ',
            ChangeTag::Removed => '-',
            ChangeTag::Added => '+',
        };
        format!("{}{}", prefix, self.text)
    }
}

/// Diff two text blocks line by line.
pub fn diff_lines(old: &str, new: &str) -> Vec<DiffLine> {
    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();
    let n = old_lines.len();
    let m = new_lines.len();

    // lcs[i][j] = LCS length of old[i..] and new[j..], flattened row-major.
    let width = m + 1;
    let mut lcs = vec![0u32; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i * width + j] = if old_lines[i] == new_lines[j] {
                lcs[(i + 1) * width + j + 1] + 1
            } else {
                lcs[(i + 1) * width + j].max(lcs[i * width + j + 1])
            };
        }
    }

    let mut out = Vec::new();
    let mut i = 0;
    let mut j = 0;
    while i < n && j < m {
        if old_lines[i] == new_lines[j] {
            out.push(DiffLine::new(ChangeTag::Context, old_lines[i]));
            i += 1;
            j += 1;
        } else if lcs[(i + 1) * width + j] >= lcs[i * width + j + 1] {
            out.push(DiffLine::new(ChangeTag::Removed, old_lines[i]));
            i += 1;
        } else {
            out.push(DiffLine::new(ChangeTag::Added, new_lines[j]));
            j += 1;
        }
    }
    for line in &old_lines[i..] {
        out.push(DiffLine::new(ChangeTag::Removed, line));
    }
    for line in &new_lines[j..] {
        out.push(DiffLine::new(ChangeTag::Added, line));
    }

    out
}

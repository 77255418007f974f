//! Signature extraction.
//!
//! A signature is a single trimmed source line that starts a top-level
//! function. Recognition is a plain string-prefix check on `fn` / `pub fn`,
//! never a parse: the inputs are generated handler files with one handler
//! per `fn` line, and two signatures are "the same" only when the trimmed
//! lines are character-identical.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::source::SourceText;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    /// Wrap a source line, trimming surrounding whitespace.
    pub fn new(line: &str) -> Self {
        Self(line.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Literal signature lines to ignore while scanning one specific source.
///
/// Applied during extraction only, and only to the side it was built for;
/// the other side is always scanned unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    entries: HashSet<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, trimmed_line: &str) -> bool {
        self.entries.contains(trimmed_line)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scan a source for function signature lines, in line order.
///
/// A line is kept when, after trimming, it starts with `fn` or `pub fn`
/// and is not a member of `exclusions`. Matching lines are kept verbatim
/// (parameter lists and return types included).
pub fn extract_signatures(source: &SourceText, exclusions: &ExclusionSet) -> Vec<Signature> {
    let mut signatures = Vec::new();

    for line in source.lines() {
        let trimmed = line.trim();
        if exclusions.contains(trimmed) {
            continue;
        }
        if is_signature_line(trimmed) {
            signatures.push(Signature::new(trimmed));
        }
    }

    signatures
}

fn is_signature_line(trimmed: &str) -> bool {
    trimmed.starts_with("fn") || trimmed.starts_with("pub fn")
}

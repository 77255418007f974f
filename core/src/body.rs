//! Handler body capture.
//!
//! Re-scans a source with the signatures previously extracted from it and
//! cuts out one contiguous block per signature occurrence. The scan is a
//! two-state machine: idle until a line's trimmed text equals a known
//! signature, then capturing every line verbatim until the first line whose
//! first character is `}`. That terminating line belongs to the body.
//!
//! There is deliberately no brace-depth counting: a `}` that starts a line
//! inside a nested block ends the capture early. The generated handler
//! files this tool targets close nested blocks with indentation, so in
//! practice only the final brace sits in column zero.

use serde::Serialize;

use crate::signature::Signature;
use crate::source::SourceText;

/// One captured handler body: the signature line through the first
/// column-zero `}`, all lines verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FunctionBody {
    text: String,
}

impl FunctionBody {
    fn from_lines(lines: &[&str]) -> Self {
        Self {
            text: lines.join("\n"),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Body text with surrounding whitespace removed, the form bodies are
    /// compared in.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Whether this body belongs to `signature`. The first captured line is
    /// the signature itself, so substring containment is equivalent to
    /// ownership.
    pub fn contains_signature(&self, signature: &Signature) -> bool {
        self.text.contains(signature.as_str())
    }
}

/// Capture one body per line that exactly matches a known signature.
///
/// A signature whose body never reaches a column-zero `}` before end of
/// input is silently dropped; downstream matching treats the missing body
/// as "not matched", never as an error.
pub fn extract_bodies(source: &SourceText, signatures: &[Signature]) -> Vec<FunctionBody> {
    let known: std::collections::HashSet<&str> =
        signatures.iter().map(Signature::as_str).collect();

    let mut bodies = Vec::new();
    let mut capture: Option<Vec<&str>> = None;

    for line in source.lines() {
        match capture.as_mut() {
            None => {
                if known.contains(line.trim()) {
                    capture = Some(vec![line]);
                }
            }
            Some(lines) => {
                lines.push(line);
                if line.starts_with('}') {
                    bodies.push(FunctionBody::from_lines(lines));
                    capture = None;
                }
            }
        }
    }

    // A still-open capture at EOF is discarded, not emitted.
    bodies
}

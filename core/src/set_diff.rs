//! Symmetric difference of two signature collections.

use std::collections::HashSet;

use crate::signature::Signature;

/// Signatures present on one side but absent from the other.
///
/// Returns the elements of `a` not found in `b`, followed by the elements
/// of `b` not found in `a`, each side in its input order. Duplicates within
/// a side are preserved: a signature appearing twice in `a` and never in
/// `b` is reported twice. Callers sort both inputs beforehand when they
/// want deterministic cross-run output.
pub fn symmetric_diff(a: &[Signature], b: &[Signature]) -> Vec<Signature> {
    let in_a: HashSet<&str> = a.iter().map(Signature::as_str).collect();
    let in_b: HashSet<&str> = b.iter().map(Signature::as_str).collect();

    let mut diffs = Vec::new();
    for sig in a {
        if !in_b.contains(sig.as_str()) {
            diffs.push(sig.clone());
        }
    }
    for sig in b {
        if !in_a.contains(sig.as_str()) {
            diffs.push(sig.clone());
        }
    }
    diffs
}

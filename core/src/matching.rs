//! Matching signatures to captured bodies across the two sides.

use std::collections::HashSet;

use crate::body::FunctionBody;
use crate::signature::Signature;

/// The first body, in extraction order, that belongs to `signature`.
///
/// Absence is a normal outcome (the body may have been discarded as
/// unterminated), so the lookup returns an `Option` rather than an error.
pub fn find_body<'a>(bodies: &'a [FunctionBody], signature: &Signature) -> Option<&'a FunctionBody> {
    bodies.iter().find(|body| body.contains_signature(signature))
}

/// Signatures present in both lists with a captured body on both sides.
///
/// Order follows the first list; repeated occurrences of the same
/// signature collapse to one match so the report carries one entry per
/// handler.
pub fn match_signatures(
    sigs_a: &[Signature],
    sigs_b: &[Signature],
    bodies_a: &[FunctionBody],
    bodies_b: &[FunctionBody],
) -> Vec<Signature> {
    let in_b: HashSet<&str> = sigs_b.iter().map(Signature::as_str).collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut matched = Vec::new();

    for sig in sigs_a {
        if !in_b.contains(sig.as_str()) {
            continue;
        }
        if !seen.insert(sig.as_str()) {
            continue;
        }
        if find_body(bodies_a, sig).is_some() && find_body(bodies_b, sig).is_some() {
            matched.push(sig.clone());
        }
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::extract_bodies;
    use crate::source::SourceText;

    fn sigs(lines: &[&str]) -> Vec<Signature> {
        lines.iter().map(|l| Signature::new(l)).collect()
    }

    fn bodies_for(text: &str, signatures: &[Signature]) -> Vec<FunctionBody> {
        extract_bodies(&SourceText::from_string("test.rs", text), signatures)
    }

    #[test]
    fn matches_signature_present_on_both_sides_with_bodies() {
        let signatures = sigs(&["fn shared() {"]);
        let bodies_a = bodies_for("fn shared() {\n    a\n}\n", &signatures);
        let bodies_b = bodies_for("fn shared() {\n    b\n}\n", &signatures);

        let matched = match_signatures(&signatures, &signatures, &bodies_a, &bodies_b);
        assert_eq!(matched, signatures);
    }

    #[test]
    fn signature_missing_from_one_list_is_not_matched() {
        let a = sigs(&["fn only_a() {"]);
        let b = sigs(&["fn only_b() {"]);
        let bodies_a = bodies_for("fn only_a() {\n}\n", &a);
        let bodies_b = bodies_for("fn only_b() {\n}\n", &b);

        assert!(match_signatures(&a, &b, &bodies_a, &bodies_b).is_empty());
    }

    #[test]
    fn signature_without_a_body_is_silently_excluded() {
        let signatures = sigs(&["fn shared() {"]);
        let bodies_a = bodies_for("fn shared() {\n}\n", &signatures);
        // Side B never terminates the body, so it was discarded.
        let bodies_b = bodies_for("fn shared() {\n    open\n", &signatures);

        assert!(match_signatures(&signatures, &signatures, &bodies_a, &bodies_b).is_empty());
    }

    #[test]
    fn match_order_follows_first_list() {
        let a = sigs(&["fn z() {", "fn a() {"]);
        let b = sigs(&["fn a() {", "fn z() {"]);
        let text = "fn z() {\n}\nfn a() {\n}\n";
        let bodies_a = bodies_for(text, &a);
        let bodies_b = bodies_for(text, &b);

        let matched = match_signatures(&a, &b, &bodies_a, &bodies_b);
        assert_eq!(matched, sigs(&["fn z() {", "fn a() {"]));
    }

    #[test]
    fn find_body_scans_past_unrelated_bodies() {
        let signatures = sigs(&["fn first() {", "fn second() {"]);
        let bodies = bodies_for("fn first() {\n}\nfn second() {\n}\n", &signatures);

        let body = find_body(&bodies, &Signature::new("fn second() {"))
            .expect("second body should be found");
        assert!(body.text().starts_with("fn second() {"));
    }

    #[test]
    fn find_body_returns_none_when_absent() {
        let bodies = bodies_for("fn other() {\n}\n", &sigs(&["fn other() {"]));
        assert!(find_body(&bodies, &Signature::new("fn missing() {")).is_none());
    }
}

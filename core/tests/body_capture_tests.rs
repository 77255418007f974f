use handler_diff::{extract_bodies, Signature, SourceText};

fn sigs(lines: &[&str]) -> Vec<Signature> {
    lines.iter().map(|l| Signature::new(l)).collect()
}

#[test]
fn two_adjacent_functions_yield_two_separate_bodies() {
    let src = SourceText::from_string(
        "test.rs",
        "fn foo() -> String {\n\
         \x20   x\n\
         }\n\
         fn bar() -> String {\n\
         \x20   y\n\
         }\n",
    );
    let signatures = sigs(&["fn foo() -> String {", "fn bar() -> String {"]);

    let bodies = extract_bodies(&src, &signatures);
    assert_eq!(bodies.len(), 2, "exactly one body per signature occurrence");
    assert_eq!(bodies[0].text(), "fn foo() -> String {\n    x\n}");
    assert_eq!(bodies[1].text(), "fn bar() -> String {\n    y\n}");
}

#[test]
fn capture_terminates_at_first_column_zero_brace() {
    // Regression guard for the intentionally preserved heuristic: no
    // depth counting, so a nested block closed in column zero cuts the
    // body short.
    let src = SourceText::from_string(
        "test.rs",
        "fn handler() -> String {\n\
         \x20   match kind {\n\
         }\n\
         \x20   rest()\n\
         }\n",
    );
    let bodies = extract_bodies(&src, &sigs(&["fn handler() -> String {"]));

    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0].text(),
        "fn handler() -> String {\n    match kind {\n}"
    );
}

#[test]
fn signature_without_terminator_produces_no_body() {
    let src = SourceText::from_string("test.rs", "fn never_closed() {\n    x\n");
    let bodies = extract_bodies(&src, &sigs(&["fn never_closed() {"]));
    assert!(bodies.is_empty());
}

#[test]
fn repeated_signature_yields_one_body_per_occurrence() {
    let src = SourceText::from_string(
        "test.rs",
        "fn dup() {\n\
         \x20   first\n\
         }\n\
         fn dup() {\n\
         \x20   second\n\
         }\n",
    );
    let bodies = extract_bodies(&src, &sigs(&["fn dup() {"]));

    assert_eq!(bodies.len(), 2);
    assert!(bodies[0].text().contains("first"));
    assert!(bodies[1].text().contains("second"));
}

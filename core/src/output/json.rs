use crate::report::ComparisonReport;

/// Serialize a full comparison report to a JSON string.
pub fn serialize_report(report: &ComparisonReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompareConfig;
    use crate::report::compare_sources;
    use crate::source::SourceText;

    #[test]
    fn report_serializes_with_stable_field_names() {
        let a = SourceText::from_string("a.rs", "fn foo() {\n    x\n}\n");
        let b = SourceText::from_string("b.rs", "fn foo() {\n    y\n}\n");
        let report = compare_sources(&a, &b, &CompareConfig::unfiltered());

        let json = serialize_report(&report).expect("serialize should succeed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

        assert_eq!(value["path_a"], "a.rs");
        assert_eq!(value["path_b"], "b.rs");
        assert_eq!(value["entries"][0]["signature"], "fn foo() {");
        assert_eq!(value["entries"][0]["lines"][1]["tag"], "removed");
        assert_eq!(value["entries"][0]["lines"][1]["text"], "    x");
    }
}

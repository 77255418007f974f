//! Configuration for a comparison run.
//!
//! `CompareConfig` centralizes the knobs so nothing is hardcoded in the
//! pipeline itself. The default reproduces the original handler audit:
//! side A is scanned unfiltered, while side B skips the handlers that only
//! exist in the C++ grammar and therefore can never have a C counterpart.

use crate::signature::ExclusionSet;

/// Handlers specific to the C++ grammar. Skipping them keeps the symmetric
/// difference focused on handlers that genuinely drifted between the two
/// formatter sources.
const CPP_ONLY_HANDLERS: &[&str] = &[
    "fn handle_abstract_function_declarator(root: Node, src: String) -> String {",
    "fn handle_abstract_reference_declarator(root: Node, src: String) -> String {",
    "fn handle_access_specifier(root: Node, src: String) -> String {",
    "fn handle_alias_declaration(root: Node, src: String) -> String {",
    "fn handle_catch_clause(root: Node, src: String) -> String {",
    "fn handle_class_specifier(root: Node, src: String) -> String {",
    "fn handle_condition_clause(root: Node, src: String) -> String {",
    "fn handle_field_initializer(root: Node, src: String) -> String {",
    "fn handle_field_initializer_list(root: Node, src: String) -> String {",
    "fn handle_for_range_loop(root: Node, src: String) -> String {",
    "fn handle_lambda_capture_specifier(root: Node, src: String) -> String {",
    "fn handle_lambda_expression(root: Node, src: String) -> String {",
    "fn handle_namespace_alias_definition(root: Node, src: String) -> String {",
    "fn handle_namespace_definition(root: Node, src: String) -> String {",
    "fn handle_nested_namespace_specifier(root: Node, src: String) -> String {",
    "fn handle_new_expression(root: Node, src: String) -> String {",
    "fn handle_qualified_identifier(root: Node, src: String) -> String {",
    "fn handle_reference_declarator(root: Node, src: String) -> String {",
    "fn handle_structured_binding_declarator(root: Node, src: String) -> String {",
    "fn handle_subscript_argument_list(root: Node, src: String) -> String {",
    "fn handle_template_argument_list(root: Node, src: String) -> String {",
    "fn handle_template_declaration(root: Node, src: String) -> String {",
    "fn handle_template_function(root: Node, src: String) -> String {",
    "fn handle_template_parameter_list(root: Node, src: String) -> String {",
    "fn handle_template_type(root: Node, src: String) -> String {",
    "fn handle_try_statement(root: Node, src: String) -> String {",
    "fn handle_type_parameter_declaration(root: Node, src: String) -> String {",
    "fn handle_using_declaration(root: Node, src: String) -> String {",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    /// Signature lines ignored while extracting from side B only.
    pub b_exclusions: ExclusionSet,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            b_exclusions: ExclusionSet::new(CPP_ONLY_HANDLERS.iter().copied()),
        }
    }
}

impl CompareConfig {
    /// A config with no exclusions on either side.
    pub fn unfiltered() -> Self {
        Self {
            b_exclusions: ExclusionSet::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_excludes_the_cpp_only_handlers() {
        let config = CompareConfig::default();
        assert_eq!(config.b_exclusions.len(), CPP_ONLY_HANDLERS.len());
        assert!(config
            .b_exclusions
            .contains("fn handle_lambda_expression(root: Node, src: String) -> String {"));
    }

    #[test]
    fn unfiltered_has_no_exclusions() {
        assert!(CompareConfig::unfiltered().b_exclusions.is_empty());
    }
}

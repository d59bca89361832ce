use crate::context::LintContext;
use crate::diagnostics::{Diagnostic, Severity};
use crate::schema_utils::{combined_members, property, string_field};
use crate::traits::{LintRule, TargetLintRule};
use serde_json::Value;

/// Leaf assertions for the Problem Details envelope. All conditions are
/// evaluated independently; a schema can fail several at once.
fn assert_problem_schema(schema: &Value) -> Vec<Diagnostic> {
    let mut results = Vec::new();

    if schema.get("type").and_then(Value::as_str) != Some("object") {
        results.push(Diagnostic::new("Problem json must have type 'object'"));
    }

    let type_prop = property(schema, "type");
    if string_field(type_prop, "type") != Some("string")
        || string_field(type_prop, "format") != Some("uri-reference")
    {
        results.push(Diagnostic::new(
            "Problem json must have property 'type' with type 'string' and format 'uri-reference'",
        ));
    }

    let title = property(schema, "title");
    if string_field(title, "type") != Some("string") {
        results.push(Diagnostic::new(
            "Problem json must have property 'title' with type 'string'",
        ));
    }

    let status = property(schema, "status");
    if string_field(status, "type") != Some("integer")
        || string_field(status, "format") != Some("int32")
    {
        results.push(Diagnostic::new(
            "Problem json must have property 'status' with type 'integer' and format 'int32'",
        ));
    }

    let detail = property(schema, "detail");
    if string_field(detail, "type") != Some("string") {
        results.push(Diagnostic::new(
            "Problem json must have property 'detail' with type 'string'",
        ));
    }

    let instance = property(schema, "instance");
    if string_field(instance, "type") != Some("string") {
        results.push(Diagnostic::new(
            "Problem json must have property 'instance' with type 'string'",
        ));
    }

    results
}

/// Composition walk: every `anyOf`/`oneOf`/`allOf` member must
/// independently satisfy the full envelope shape and all issues are
/// aggregated. Kept bug-compatible with the rulesets that depend on the
/// aggregated messages; this is not true union-validity checking.
fn check_schema(schema: &Value) -> Vec<Diagnostic> {
    let members = combined_members(schema);
    if members.is_empty() {
        return assert_problem_schema(schema);
    }
    members.into_iter().flat_map(check_schema).collect()
}

/// Structural check that a JSON Schema describes the Problem Details
/// (RFC 9457) envelope.
pub struct ProblemSchemaRule;

impl LintRule for ProblemSchemaRule {
    fn name(&self) -> &'static str {
        "problem_schema"
    }

    fn description(&self) -> &'static str {
        "Requires error response schemas to describe the Problem Details envelope"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }
}

impl TargetLintRule for ProblemSchemaRule {
    fn check(
        &self,
        target: &Value,
        _options: Option<&Value>,
        _ctx: &LintContext<'_>,
    ) -> Vec<Diagnostic> {
        if !target.is_object() {
            return Vec::new();
        }
        check_schema(target)
    }
}

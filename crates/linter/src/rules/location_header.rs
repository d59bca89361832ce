use crate::context::LintContext;
use crate::diagnostics::{Diagnostic, PathSegment, Severity};
use crate::traits::{LintRule, TargetLintRule};
use serde_json::Value;

fn child_path(base: &[PathSegment], segments: &[&str]) -> Vec<PathSegment> {
    let mut path = base.to_vec();
    path.extend(segments.iter().map(|s| PathSegment::from(*s)));
    path
}

/// Requires 201 responses to declare a usable `Location` header: described,
/// typed as a `uri`-format string, and carrying an example.
pub struct LocationHeaderRule;

impl LintRule for LocationHeaderRule {
    fn name(&self) -> &'static str {
        "location_header"
    }

    fn description(&self) -> &'static str {
        "Requires 201 responses to define a described Location header with a uri schema"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warn
    }
}

impl TargetLintRule for LocationHeaderRule {
    fn check(
        &self,
        target: &Value,
        _options: Option<&Value>,
        ctx: &LintContext<'_>,
    ) -> Vec<Diagnostic> {
        let Some(headers) = target.as_object() else {
            return Vec::new();
        };

        let Some(location) = headers.get("Location").filter(|v| v.is_object()) else {
            return vec![
                Diagnostic::new("201 responses SHOULD define a Location header")
                    .at(ctx.path.to_vec()),
            ];
        };

        // A referenced header is the host's to resolve and re-lint.
        if location.get("$ref").and_then(Value::as_str).is_some() {
            return Vec::new();
        }

        let schema = location.get("schema");
        let mut issues = Vec::new();

        if location.get("description").is_none() {
            issues.push(
                Diagnostic::new("Location header should include a description")
                    .at(child_path(ctx.path, &["Location"])),
            );
        }

        let schema_type = schema.and_then(|s| s.get("type")).and_then(Value::as_str);
        let schema_format = schema.and_then(|s| s.get("format")).and_then(Value::as_str);
        if schema_type != Some("string") || schema_format != Some("uri") {
            issues.push(
                Diagnostic::new("Location header schema should be a string with uri format")
                    .at(child_path(ctx.path, &["Location", "schema"])),
            );
        }

        if schema.and_then(|s| s.get("example")).is_none() {
            issues.push(
                Diagnostic::new("Location header schema should include an example")
                    .at(child_path(ctx.path, &["Location", "schema"])),
            );
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers_path() -> Vec<PathSegment> {
        vec![
            PathSegment::from("paths"),
            PathSegment::from("/pets"),
            PathSegment::from("post"),
            PathSegment::from("responses"),
            PathSegment::from("201"),
            PathSegment::from("headers"),
        ]
    }

    fn run(target: &Value) -> Vec<Diagnostic> {
        let path = headers_path();
        let ctx = LintContext::new(Severity::Warn).with_path(&path);
        LocationHeaderRule.check(target, None, &ctx)
    }

    #[test]
    fn complete_location_header_passes() {
        let headers = json!({
            "Location": {
                "description": "URI of the created pet",
                "schema": {"type": "string", "format": "uri", "example": "https://api.test/pets/1"}
            }
        });
        assert_eq!(run(&headers), Vec::new());
    }

    #[test]
    fn missing_location_header_is_one_finding_at_the_headers_node() {
        let diagnostics = run(&json!({}));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "201 responses SHOULD define a Location header"
        );
        assert_eq!(diagnostics[0].path.as_deref(), Some(headers_path().as_slice()));
    }

    #[test]
    fn non_object_location_counts_as_missing() {
        let diagnostics = run(&json!({"Location": "somewhere"}));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("SHOULD define"));
    }

    #[test]
    fn referenced_header_is_skipped() {
        let headers = json!({"Location": {"$ref": "#/components/headers/Location"}});
        assert_eq!(run(&headers), Vec::new());
    }

    #[test]
    fn missing_description_schema_and_example_all_report() {
        let headers = json!({"Location": {}});
        let diagnostics = run(&headers);
        assert_eq!(diagnostics.len(), 3);
        assert!(diagnostics[0].message.contains("description"));
        assert!(diagnostics[1].message.contains("uri format"));
        assert!(diagnostics[2].message.contains("example"));
    }

    #[test]
    fn schema_issues_point_below_the_location_header() {
        let headers = json!({
            "Location": {"description": "d", "schema": {"type": "string"}}
        });
        let diagnostics = run(&headers);
        assert_eq!(diagnostics.len(), 2);
        let expected = child_path(&headers_path(), &["Location", "schema"]);
        assert_eq!(diagnostics[0].path.as_deref(), Some(expected.as_slice()));
    }

    #[test]
    fn non_object_target_is_skipped() {
        assert_eq!(run(&json!(null)), Vec::new());
        assert_eq!(run(&json!(["Location"])), Vec::new());
    }
}

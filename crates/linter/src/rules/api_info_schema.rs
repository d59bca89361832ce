use crate::context::LintContext;
use crate::diagnostics::{Diagnostic, Severity};
use crate::schema_utils::{combined_members, deref, property, string_field};
use crate::traits::{LintRule, TargetLintRule};
use serde_json::Value;

/// Canonical SemVer pattern the `version` property must declare, compared
/// bit-exact (the assertion is "is this specific pattern", not "is a valid
/// regex").
pub const SEMVER_PATTERN: &str = r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$";

const REQUIRED_STATUS: [&str; 4] = ["ALPHA", "BETA", "LIVE", "DEPRECATED"];

fn assert_api_info_schema(schema: &Value) -> Vec<Diagnostic> {
    let mut results = Vec::new();

    if schema.get("type").and_then(Value::as_str) != Some("object") {
        results.push(Diagnostic::new("ApiInfo json must have type 'object'"));
    }

    let name = property(schema, "name");
    if string_field(name, "type") != Some("string") {
        results.push(Diagnostic::new(
            "ApiInfo json must have property 'name' with type 'string' and format 'uri-reference'",
        ));
    }

    let version = property(schema, "version");
    if string_field(version, "type") != Some("string")
        || string_field(version, "pattern") != Some(SEMVER_PATTERN)
    {
        results.push(Diagnostic::new(
            "ApiInfo json must have property 'version' with type 'string' and pattern for semver.",
        ));
    }

    let status = property(schema, "status");
    let enum_values = status
        .and_then(|s| s.get("x-extensible-enum"))
        .and_then(Value::as_array);
    let has_required_statuses = enum_values.is_some_and(|values| {
        REQUIRED_STATUS
            .iter()
            .all(|required| values.iter().any(|v| v.as_str() == Some(required)))
    });
    if string_field(status, "type") != Some("string") || !has_required_statuses {
        results.push(Diagnostic::new(
            "ApiInfo json must have property 'status' with x-extensible-enum values: ALPHA, BETA, LIVE, DEPRECATED.",
        ));
    }

    let release_date = property(schema, "releaseDate");
    if string_field(release_date, "type") != Some("string")
        || string_field(release_date, "format") != Some("date")
    {
        results.push(Diagnostic::new(
            "ApiInfo json must have property 'releaseDate' with type 'string' and format 'date'",
        ));
    }

    let documentation = property(schema, "documentation");
    if string_field(documentation, "type") != Some("string")
        || string_field(documentation, "format") != Some("uri")
    {
        results.push(Diagnostic::new(
            "ApiInfo json must have property 'documentation' with type 'string' and format 'uri'",
        ));
    }

    let release_notes = property(schema, "releaseNotes");
    if string_field(release_notes, "type") != Some("string")
        || string_field(release_notes, "format") != Some("uri")
    {
        results.push(Diagnostic::new(
            "ApiInfo json must have property 'releaseNotes' with type 'string' and format 'uri'",
        ));
    }

    results
}

/// Composition walk with per-node reference resolution: the node and every
/// composition member are dereferenced before inspection, and all member
/// issues are aggregated.
fn check_schema(schema: &Value, document: Option<&Value>) -> Vec<Diagnostic> {
    let resolved = deref(document, schema);
    let members = combined_members(resolved);
    if members.is_empty() {
        return assert_api_info_schema(resolved);
    }
    members
        .into_iter()
        .flat_map(|member| check_schema(member, document))
        .collect()
}

fn document_from_raw(raw: Option<&[u8]>) -> Option<Value> {
    let text = std::str::from_utf8(raw?).ok()?;
    serde_yaml::from_str(text).ok()
}

/// Structural check that a JSON Schema describes the ApiInfo envelope
/// (name/version/status/releaseDate/documentation/releaseNotes).
///
/// The bound value may be a media-type object wrapping the schema, and the
/// schema may be a local `$ref` into the surrounding document; references
/// are resolved against the host-provided document data, or against a
/// document parsed from the host's raw source bytes when no data is
/// available.
pub struct ApiInfoSchemaRule;

impl LintRule for ApiInfoSchemaRule {
    fn name(&self) -> &'static str {
        "api_info_schema"
    }

    fn description(&self) -> &'static str {
        "Requires the API root response schema to describe the ApiInfo envelope"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }
}

impl TargetLintRule for ApiInfoSchemaRule {
    fn check(
        &self,
        target: &Value,
        _options: Option<&Value>,
        ctx: &LintContext<'_>,
    ) -> Vec<Diagnostic> {
        let schema = target.get("schema").unwrap_or(target);
        if !schema.is_object() {
            return Vec::new();
        }

        let parsed;
        let document = match ctx.document {
            Some(data) => Some(data),
            None => {
                parsed = document_from_raw(ctx.raw);
                parsed.as_ref()
            }
        };

        // Without any document there is nothing to resolve against; a bare
        // ApiInfo reference is deferred until the host supplies one.
        if document.is_none() {
            if let Some(reference) = schema.get("$ref").and_then(Value::as_str) {
                if reference.contains("/ApiInfo") {
                    return Vec::new();
                }
            }
        }

        check_schema(schema, document)
    }
}

use crate::context::LintContext;
use crate::diagnostics::{Diagnostic, PathSegment, Severity};
use crate::traits::{LintRule, TargetLintRule};
use serde::Deserialize;
use serde_json::{Map, Value};

const REQUIRED_ALWAYS: [&str; 3] = ["400", "404", "500"];
const REQUIRED_IF_SECURED: [&str; 2] = ["401", "403"];

const PROBLEM_JSON: &str = "application/problem+json";
const PROBLEM_XML: &str = "application/problem+xml";

const MISSING_RESPONSE: &str = "missing response";
const MISSING_PROBLEM_CONTENT: &str =
    "missing application/problem+json or application/problem+xml";
const MISSING_EXAMPLE: &str = "missing example";

/// Which set of error responses the rule demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum Mode {
    /// 400/404/500, unconditionally.
    Critical,
    /// 401/403 when the operation is secured (explicitly, or by inheriting
    /// document security on a non-root path).
    ExplicitSecurity,
    /// 401/403 on the root path when it inherits document security.
    RootInherit,
}

/// Options for the `problem_details_responses` rule.
///
/// An unrecognized or absent `mode` deserializes to the default (no mode),
/// which makes the rule a no-op — unrecognized configuration is
/// intentionally not an error.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
struct ProblemDetailsOptions {
    mode: Option<Mode>,
}

impl ProblemDetailsOptions {
    fn from_json(value: Option<&Value>) -> Self {
        value
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default()
    }
}

struct ResponseIssues {
    status_code: &'static str,
    issues: Vec<&'static str>,
}

/// Checks one required status code: the response must exist, declare
/// Problem Details content, and carry at least one example.
fn validate_response(
    responses: Option<&Map<String, Value>>,
    code: &'static str,
) -> Option<ResponseIssues> {
    let mut issues = Vec::new();

    match responses.and_then(|r| r.get(code)).filter(|v| !v.is_null()) {
        None => issues.push(MISSING_RESPONSE),
        Some(response) => {
            let content = response.get("content").and_then(Value::as_object);
            let media = content
                .and_then(|c| c.get(PROBLEM_JSON).filter(|v| !v.is_null()))
                .or_else(|| content.and_then(|c| c.get(PROBLEM_XML).filter(|v| !v.is_null())));

            match media {
                None => issues.push(MISSING_PROBLEM_CONTENT),
                Some(media) => {
                    let has_examples = media
                        .get("examples")
                        .and_then(Value::as_object)
                        .is_some_and(|examples| !examples.is_empty());
                    if !has_examples {
                        issues.push(MISSING_EXAMPLE);
                    }
                }
            }
        }
    }

    (!issues.is_empty()).then_some(ResponseIssues {
        status_code: code,
        issues,
    })
}

/// Requires operations to define Problem Details (RFC 9457) error
/// responses.
///
/// Every operation needs 400/404/500 with `application/problem+json` (or
/// `+xml`) content and examples; secured operations additionally need
/// 401/403. Which half this instance enforces is selected by the `mode`
/// option so rulesets can attach different severities to each.
pub struct ProblemDetailsResponsesRule;

impl LintRule for ProblemDetailsResponsesRule {
    fn name(&self) -> &'static str {
        "problem_details_responses"
    }

    fn description(&self) -> &'static str {
        "Requires operations to define Problem Details error responses with examples"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }
}

impl TargetLintRule for ProblemDetailsResponsesRule {
    fn check(
        &self,
        target: &Value,
        options: Option<&Value>,
        ctx: &LintContext<'_>,
    ) -> Vec<Diagnostic> {
        let Some(mode) = ProblemDetailsOptions::from_json(options).mode else {
            return Vec::new();
        };

        let responses = target.get("responses").and_then(Value::as_object);
        let op_security = target.get("security");
        let global_security_active = ctx
            .document
            .and_then(|doc| doc.get("security"))
            .and_then(Value::as_array)
            .is_some_and(|security| !security.is_empty());
        let is_root = matches!(ctx.path.get(1), Some(PathSegment::Key(route)) if route.as_str() == "/");

        let required: &[&'static str] = match mode {
            Mode::Critical => &REQUIRED_ALWAYS,
            Mode::ExplicitSecurity => {
                let explicitly_disabled = op_security
                    .and_then(Value::as_array)
                    .is_some_and(Vec::is_empty);
                let explicitly_active = op_security
                    .and_then(Value::as_array)
                    .is_some_and(|security| !security.is_empty());

                if explicitly_active || (!explicitly_disabled && !is_root && global_security_active)
                {
                    &REQUIRED_IF_SECURED
                } else {
                    return Vec::new();
                }
            }
            Mode::RootInherit => {
                let inherits_global = is_root
                    && op_security.is_none_or(Value::is_null)
                    && global_security_active;
                if inherits_global {
                    &REQUIRED_IF_SECURED
                } else {
                    return Vec::new();
                }
            }
        };

        let failures: Vec<ResponseIssues> = required
            .iter()
            .copied()
            .filter_map(|code| validate_response(responses, code))
            .collect();
        if failures.is_empty() {
            return Vec::new();
        }

        let level = if ctx.severity == Severity::Error {
            "MUST"
        } else {
            "SHOULD"
        };
        let details = failures
            .iter()
            .map(|failure| format!("{} ({})", failure.status_code, failure.issues.join(", ")))
            .collect::<Vec<_>>()
            .join("; ");
        let message = format!(
            "Each operation {level} define Problem Details for: {}. Issues: {details}.",
            required.join(", ")
        );

        let mut path = ctx.path.to_vec();
        path.push(PathSegment::from("responses"));
        vec![Diagnostic::new(message).at(path)]
    }
}

//! End-to-end flow a host would drive: seed the rule registry from config,
//! run the severity override against the document, then invoke the
//! response checker at the effective severity.

use oas_linter::prelude::*;
use oas_linter::{OverrideSeverityRule, ProblemDetailsResponsesRule};
use serde_json::{json, Value};

fn pygeoapi_document() -> Value {
    json!({
        "info": {"x-api-type": "pygeoapi"},
        "security": [{"apiKey": []}],
        "paths": {"/pets": {"get": {"responses": {}}}}
    })
}

fn override_options() -> Value {
    json!({
        "value": "pygeoapi",
        "target": "info.x-api-type",
        "rulesToAdjust": {"problem_details_responses": "warn"}
    })
}

#[test]
fn override_downgrades_the_checker_from_must_to_should() {
    let config: LintConfig = serde_json::from_value(json!({
        "rules": {"problem_details_responses": ["error", {"mode": "critical"}]}
    }))
    .unwrap();
    let mut registry = RuleRegistry::from_config(&config);
    assert_eq!(
        registry.get("problem_details_responses").map(|d| d.severity),
        Some(Severity::Error)
    );

    let document = pygeoapi_document();
    let ctx = LintContext::new(Severity::Warn).with_document(&document);
    let opts = override_options();
    let results = OverrideSeverityRule
        .apply(&document, Some(&opts), &ctx, &mut registry)
        .unwrap();
    assert!(results.is_empty());

    let definition = registry.get("problem_details_responses").unwrap();
    assert_eq!(definition.severity, Severity::Warn);
    assert!(definition
        .message
        .contains("due to `info.x-api-type` of `pygeoapi`"));

    // The checker now runs at the downgraded severity and words its
    // finding accordingly.
    let operation = &document["paths"]["/pets"]["get"];
    let path = [
        PathSegment::from("paths"),
        PathSegment::from("/pets"),
        PathSegment::from("get"),
    ];
    let check_ctx = LintContext::new(definition.severity)
        .with_document(&document)
        .with_path(&path);
    let diagnostics = ProblemDetailsResponsesRule.check(
        operation,
        Some(&json!({"mode": "critical"})),
        &check_ctx,
    );

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.starts_with("Each operation SHOULD"));
}

#[test]
fn override_is_idempotent_across_lint_runs() {
    let mut registry = RuleRegistry::from_config(&LintConfig::default());
    let document = pygeoapi_document();
    let ctx = LintContext::new(Severity::Warn).with_document(&document);
    let opts = override_options();

    for _ in 0..2 {
        OverrideSeverityRule
            .apply(&document, Some(&opts), &ctx, &mut registry)
            .unwrap();
    }

    let message = &registry.get("problem_details_responses").unwrap().message;
    assert_eq!(message.matches("Severity has been downgraded").count(), 1);
}

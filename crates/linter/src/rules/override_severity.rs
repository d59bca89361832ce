use crate::context::LintContext;
use crate::diagnostics::{dotted, Diagnostic, Severity};
use crate::error::RuleError;
use crate::registry::RuleRegistry;
use crate::selector;
use crate::traits::{LintRule, RegistryLintRule};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Options for the `override_severity` rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideSeverityOptions {
    /// The marker value that triggers the override (e.g. `pygeoapi`).
    pub value: String,
    /// Selector locating the marker in the bound value.
    pub target: String,
    /// Rule ids to adjust, with the severity each one is set to.
    pub rules_to_adjust: BTreeMap<String, Severity>,
}

/// Separator inserted between an existing rule message and the appended
/// downgrade explanation.
fn message_separator(message: &str) -> &'static str {
    match message.chars().last() {
        Some('.' | '!' | '?') => "\n",
        _ => ".\n",
    }
}

/// Downgrades sibling rule severities when a configurable marker in the
/// document matches (e.g. generator-specific API types whose output cannot
/// satisfy every rule).
///
/// This is the one rule with cross-cutting side effects: it mutates the
/// live rule registry and must run before the rules it adjusts. It never
/// reports diagnostics of its own.
pub struct OverrideSeverityRule;

impl LintRule for OverrideSeverityRule {
    fn name(&self) -> &'static str {
        "override_severity"
    }

    fn description(&self) -> &'static str {
        "Adjusts sibling rule severities when a document marker matches"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warn
    }
}

impl RegistryLintRule for OverrideSeverityRule {
    fn apply(
        &self,
        target: &Value,
        options: Option<&Value>,
        _ctx: &LintContext<'_>,
        registry: &mut RuleRegistry,
    ) -> Result<Vec<Diagnostic>, RuleError> {
        let opts: OverrideSeverityOptions = options
            .map(|v| serde_json::from_value(v.clone()))
            .transpose()
            .map_err(|err| RuleError::InvalidOptions(err.to_string()))?
            .ok_or_else(|| {
                RuleError::InvalidOptions("override_severity requires options".to_string())
            })?;

        if opts.target.trim().is_empty() {
            return Err(RuleError::InvalidOptions(
                "override_severity requires a non-empty target selector".to_string(),
            ));
        }

        let targets = selector::lint_targets(target, &opts.target);
        let Some(matched) = targets
            .into_iter()
            .find(|t| t.value.as_str() == Some(opts.value.as_str()))
        else {
            return Ok(Vec::new());
        };

        let target_label = dotted(&matched.path);
        let api_type = opts.value;

        for (rule_id, new_severity) in &opts.rules_to_adjust {
            let Some(rule) = registry.get_mut(rule_id) else {
                continue;
            };
            if rule.severity == *new_severity {
                continue;
            }

            let previous = rule.severity;
            rule.severity = *new_severity;
            tracing::debug!(
                rule = rule_id.as_str(),
                from = previous.label(),
                to = new_severity.label(),
                marker = api_type.as_str(),
                "rule severity overridden"
            );

            let explanation = format!(
                "Severity has been downgraded from `{previous}` due to `{target_label}` of `{api_type}`"
            );
            if rule.message.contains(&explanation) {
                continue;
            }
            let trimmed = rule.message.trim_end();
            rule.message = if trimmed.is_empty() {
                explanation
            } else {
                format!("{trimmed}{}{explanation}", message_separator(trimmed))
            };
        }

        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RuleDefinition;
    use serde_json::json;

    fn options(target: &str) -> Value {
        json!({
            "value": "pygeoapi",
            "target": target,
            "rulesToAdjust": {"demo-rule": "warn"}
        })
    }

    fn registry_with(severity: Severity, message: &str) -> RuleRegistry {
        let mut registry = RuleRegistry::new();
        registry.insert("demo-rule", RuleDefinition::new(severity, message));
        registry
    }

    fn apply(target: &Value, opts: &Value, registry: &mut RuleRegistry) -> Vec<Diagnostic> {
        let ctx = LintContext::new(Severity::Warn);
        OverrideSeverityRule
            .apply(target, Some(opts), &ctx, registry)
            .unwrap()
    }

    #[test]
    fn downgrades_when_a_bracket_selector_matches() {
        let mut registry = registry_with(Severity::Error, "Original message");
        let target = json!({"metadata": {"x-api-type": "pygeoapi"}});

        let results = apply(
            &target,
            &options("$.metadata[\"x-api-type\"]"),
            &mut registry,
        );

        assert_eq!(results, Vec::new());
        let rule = registry.get("demo-rule").unwrap();
        assert_eq!(rule.severity, Severity::Warn);
        assert!(rule
            .message
            .contains("Severity has been downgraded from `error`"));
        assert!(rule.message.contains("`metadata.x-api-type`"));
    }

    #[test]
    fn leaves_rules_untouched_when_value_differs() {
        let mut registry = registry_with(Severity::Error, "Original message");
        let target = json!({"metadata": {"x-api-type": "standard"}});

        apply(
            &target,
            &options("$.metadata[\"x-api-type\"]"),
            &mut registry,
        );

        let rule = registry.get("demo-rule").unwrap();
        assert_eq!(rule.severity, Severity::Error);
        assert_eq!(rule.message, "Original message");
    }

    #[test]
    fn leaves_rules_untouched_when_selector_matches_nothing() {
        let mut registry = registry_with(Severity::Warn, "Stable message.");
        let target = json!({"metadata": {}});

        apply(
            &target,
            &options("$.metadata[\"x-api-type\"]"),
            &mut registry,
        );

        let rule = registry.get("demo-rule").unwrap();
        assert_eq!(rule.severity, Severity::Warn);
        assert_eq!(rule.message, "Stable message.");
    }

    #[test]
    fn supports_at_key_selectors() {
        let mut registry = registry_with(Severity::Error, "Initial");
        let target = json!({"pygeoapi": true, "standard": true});

        apply(&target, &options("@key"), &mut registry);

        let rule = registry.get("demo-rule").unwrap();
        assert_eq!(rule.severity, Severity::Warn);
        assert!(rule.message.contains("due to `pygeoapi` of `pygeoapi`"));
    }

    #[test]
    fn empty_message_gets_bare_explanation() {
        let mut registry = registry_with(Severity::Error, "");
        let target = json!({"info": {"x-api-type": "pygeoapi"}});

        apply(&target, &options("info.x-api-type"), &mut registry);

        assert_eq!(
            registry.get("demo-rule").unwrap().message,
            "Severity has been downgraded from `error` due to `info.x-api-type` of `pygeoapi`"
        );
    }

    #[test]
    fn unpunctuated_message_gains_period_and_newline() {
        let mut registry = registry_with(Severity::Error, "Original message");
        let target = json!({"info": {"x-api-type": "pygeoapi"}});

        apply(&target, &options("info.x-api-type"), &mut registry);

        assert!(registry
            .get("demo-rule")
            .unwrap()
            .message
            .starts_with("Original message.\nSeverity has been downgraded"));
    }

    #[test]
    fn punctuated_message_gains_only_a_newline() {
        let mut registry = registry_with(Severity::Error, "Already terminated!");
        let target = json!({"info": {"x-api-type": "pygeoapi"}});

        apply(&target, &options("info.x-api-type"), &mut registry);

        assert!(registry
            .get("demo-rule")
            .unwrap()
            .message
            .starts_with("Already terminated!\nSeverity has been downgraded"));
    }

    #[test]
    fn repeated_invocation_appends_the_explanation_once() {
        let mut registry = registry_with(Severity::Error, "Original message");
        let target = json!({"info": {"x-api-type": "pygeoapi"}});

        apply(&target, &options("info.x-api-type"), &mut registry);
        let after_first = registry.get("demo-rule").unwrap().message.clone();
        apply(&target, &options("info.x-api-type"), &mut registry);

        let message = &registry.get("demo-rule").unwrap().message;
        assert_eq!(*message, after_first);
        assert_eq!(message.matches("Severity has been downgraded").count(), 1);
    }

    #[test]
    fn absent_rule_ids_are_skipped_silently() {
        let mut registry = RuleRegistry::new();
        let target = json!({"info": {"x-api-type": "pygeoapi"}});

        let results = apply(&target, &options("info.x-api-type"), &mut registry);

        assert_eq!(results, Vec::new());
        assert!(registry.is_empty());
    }

    #[test]
    fn matching_severity_is_left_alone() {
        let mut registry = registry_with(Severity::Warn, "Original message");
        let target = json!({"info": {"x-api-type": "pygeoapi"}});

        apply(&target, &options("info.x-api-type"), &mut registry);

        let rule = registry.get("demo-rule").unwrap();
        assert_eq!(rule.severity, Severity::Warn);
        assert_eq!(rule.message, "Original message");
    }

    #[test]
    fn empty_target_selector_is_a_configuration_error() {
        let mut registry = registry_with(Severity::Error, "Primitive override");
        let ctx = LintContext::new(Severity::Warn);

        for selector in ["", "   "] {
            let opts = options(selector);
            let result =
                OverrideSeverityRule.apply(&json!("pygeoapi"), Some(&opts), &ctx, &mut registry);
            assert!(matches!(result, Err(RuleError::InvalidOptions(_))));
        }

        let rule = registry.get("demo-rule").unwrap();
        assert_eq!(rule.severity, Severity::Error);
        assert_eq!(rule.message, "Primitive override");
    }

    #[test]
    fn missing_options_are_a_configuration_error() {
        let mut registry = RuleRegistry::new();
        let ctx = LintContext::new(Severity::Warn);
        let result = OverrideSeverityRule.apply(&json!({}), None, &ctx, &mut registry);
        assert!(matches!(result, Err(RuleError::InvalidOptions(_))));
    }

    #[test]
    fn adjusts_multiple_rules_in_one_pass() {
        let mut registry = RuleRegistry::new();
        registry.insert("rule-a", RuleDefinition::new(Severity::Error, ""));
        registry.insert("rule-b", RuleDefinition::new(Severity::Error, ""));
        let opts = json!({
            "value": "pygeoapi",
            "target": "@key",
            "rulesToAdjust": {"rule-a": "warn", "rule-b": "off"}
        });
        let target = json!({"pygeoapi": true});

        apply(&target, &opts, &mut registry);

        assert_eq!(registry.get("rule-a").unwrap().severity, Severity::Warn);
        assert_eq!(registry.get("rule-b").unwrap().severity, Severity::Off);
    }
}

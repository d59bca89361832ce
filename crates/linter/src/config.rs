use crate::diagnostics::Severity;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Lint configuration as hosts hand it to this crate.
///
/// ```yaml
/// rules:
///   problem_details_responses: [error, { mode: critical }]
///   api_info_schema: warn
///   override_severity:
///     severity: warn
///     options:
///       value: pygeoapi
///       target: info.x-api-type
///       rulesToAdjust:
///         problem_schema: warn
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Per-rule overrides keyed by rule id.
    #[serde(default)]
    pub rules: HashMap<String, LintRuleConfig>,
}

impl LintConfig {
    /// Configured severity for `rule_id`, when the config mentions it.
    #[must_use]
    pub fn severity(&self, rule_id: &str) -> Option<Severity> {
        self.rules.get(rule_id).map(LintRuleConfig::severity)
    }

    /// Configured options for `rule_id`, when present.
    #[must_use]
    pub fn options(&self, rule_id: &str) -> Option<&Value> {
        self.rules.get(rule_id).and_then(LintRuleConfig::options)
    }
}

/// Configuration for a single rule: a bare severity label, an
/// `[severity, options]` pair, or an object with explicit fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LintRuleConfig {
    /// `rule_id: warn`
    Severity(Severity),
    /// `rule_id: [warn, { mode: critical }]`
    SeverityWithOptions(Severity, Value),
    /// `rule_id: { severity: warn, message: ..., options: ... }`
    Detailed {
        severity: Severity,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<Value>,
    },
}

impl LintRuleConfig {
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::Severity(severity)
            | Self::SeverityWithOptions(severity, _)
            | Self::Detailed { severity, .. } => *severity,
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Detailed { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn options(&self) -> Option<&Value> {
        match self {
            Self::Severity(_) => None,
            Self::SeverityWithOptions(_, options) => Some(options),
            Self::Detailed { options, .. } => options.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_severity_form() {
        let config: LintConfig =
            serde_json::from_value(json!({"rules": {"api_info_schema": "warn"}})).unwrap();
        assert_eq!(config.severity("api_info_schema"), Some(Severity::Warn));
        assert_eq!(config.options("api_info_schema"), None);
    }

    #[test]
    fn severity_with_options_form() {
        let config: LintConfig = serde_json::from_value(json!({
            "rules": {"problem_details_responses": ["error", {"mode": "critical"}]}
        }))
        .unwrap();
        assert_eq!(
            config.severity("problem_details_responses"),
            Some(Severity::Error)
        );
        assert_eq!(
            config.options("problem_details_responses"),
            Some(&json!({"mode": "critical"}))
        );
    }

    #[test]
    fn detailed_form_with_message() {
        let yaml = r"
rules:
  problem_schema:
    severity: error
    message: Problem responses must follow RFC 9457
";
        let config: LintConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.severity("problem_schema"), Some(Severity::Error));
        assert_eq!(
            config.rules["problem_schema"].message(),
            Some("Problem responses must follow RFC 9457")
        );
    }

    #[test]
    fn unmentioned_rule_has_no_override() {
        let config = LintConfig::default();
        assert_eq!(config.severity("problem_schema"), None);
    }
}

use crate::context::LintContext;
use crate::diagnostics::{Diagnostic, Severity};
use crate::traits::{LintRule, TargetLintRule};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;

/// Options for the `count_resource_types` rule. No `max` means no limit.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
struct CountResourceTypesOptions {
    max: Option<u64>,
}

impl CountResourceTypesOptions {
    fn from_json(value: Option<&Value>) -> Self {
        value
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default()
    }
}

/// First path segment of a route, the resource type: `/pets/{id}` -> `pets`.
fn resource_type(route: &str) -> &str {
    let trimmed = route.strip_prefix('/').unwrap_or(route);
    trimmed.split('/').next().unwrap_or("")
}

/// Limits how many top-level resource types a paths map may introduce.
pub struct CountResourceTypesRule;

impl LintRule for CountResourceTypesRule {
    fn name(&self) -> &'static str {
        "count_resource_types"
    }

    fn description(&self) -> &'static str {
        "Limits the number of distinct top-level resource types"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warn
    }
}

impl TargetLintRule for CountResourceTypesRule {
    fn check(
        &self,
        target: &Value,
        options: Option<&Value>,
        _ctx: &LintContext<'_>,
    ) -> Vec<Diagnostic> {
        let Some(paths) = target.as_object() else {
            return Vec::new();
        };
        let Some(max) = CountResourceTypesOptions::from_json(options).max else {
            return Vec::new();
        };

        let limit = usize::try_from(max).unwrap_or(usize::MAX);
        if paths.is_empty() || paths.len() <= limit {
            return Vec::new();
        }

        let resource_types: BTreeSet<&str> = paths
            .keys()
            .map(|route| resource_type(route))
            .filter(|rt| !rt.is_empty())
            .collect();
        if resource_types.len() <= limit {
            return Vec::new();
        }

        vec![Diagnostic::new(format!(
            "More than {limit} resource types found"
        ))]
    }
}

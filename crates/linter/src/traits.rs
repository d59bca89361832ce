use crate::context::LintContext;
use crate::diagnostics::{Diagnostic, Severity};
use crate::error::RuleError;
use crate::registry::RuleRegistry;
use serde_json::Value;

/// Metadata shared by every rule implementation.
pub trait LintRule: Send + Sync {
    /// Stable rule identifier, e.g. `"problem_details_responses"`.
    fn name(&self) -> &'static str;

    /// Human-readable description of what the rule enforces.
    fn description(&self) -> &'static str;

    /// Severity the rule runs at when the ruleset does not override it.
    fn default_severity(&self) -> Severity;
}

/// A pure rule: inspects the bound value and reports diagnostics.
///
/// Implementations are synchronous and free of shared state; the host may
/// invoke them concurrently across document nodes.
pub trait TargetLintRule: LintRule {
    /// Validate `target` and return diagnostics; empty means no violation.
    /// Must not panic on malformed input — absent or mis-typed nodes are
    /// findings (or no-ops), never crashes.
    fn check(
        &self,
        target: &Value,
        options: Option<&Value>,
        ctx: &LintContext<'_>,
    ) -> Vec<Diagnostic>;
}

/// A configuration rule: adjusts the live rule registry instead of
/// reporting on the document.
///
/// The registry is passed explicitly so implementations stay testable in
/// isolation, and `&mut` makes the host's single-writer obligation a
/// compile-time fact.
pub trait RegistryLintRule: LintRule {
    /// Apply the rule. `Err` is a configuration error, fatal to this
    /// invocation; the success value is always an empty diagnostic list.
    fn apply(
        &self,
        target: &Value,
        options: Option<&Value>,
        ctx: &LintContext<'_>,
        registry: &mut RuleRegistry,
    ) -> Result<Vec<Diagnostic>, RuleError>;
}

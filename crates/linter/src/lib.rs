//! Validation rule functions for OpenAPI linting hosts.
//!
//! There is no lint engine here: document parsing, node selection and rule
//! scheduling belong to the hosting linter. This crate is the *content* for
//! such hosts — rule functions that inspect a fragment of a pre-resolved
//! document and return structured diagnostics.

mod config;
mod context;
mod diagnostics;
mod error;
mod registry;
mod rules;
mod schema_utils;
pub mod selector;
mod traits;

pub use config::{LintConfig, LintRuleConfig};
pub use context::LintContext;
pub use diagnostics::{dotted, Diagnostic, PathSegment, Severity};
pub use error::RuleError;
pub use registry::{all_rule_names, registry_rules, target_rules, RuleDefinition, RuleRegistry};
pub use rules::{
    ApiInfoSchemaRule, CountResourceTypesRule, LocationHeaderRule, OverrideSeverityOptions,
    OverrideSeverityRule, ProblemDetailsResponsesRule, ProblemSchemaRule, SEMVER_PATTERN,
};
pub use traits::{LintRule, RegistryLintRule, TargetLintRule};

/// Prelude module for convenient imports.
///
/// Re-exports the types hosts touch when wiring these rules up. Import
/// with:
///
/// ```rust,ignore
/// use oas_linter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::LintConfig;
    pub use crate::context::LintContext;
    pub use crate::diagnostics::{Diagnostic, PathSegment, Severity};
    pub use crate::registry::{RuleDefinition, RuleRegistry};
    pub use crate::traits::{LintRule, RegistryLintRule, TargetLintRule};
}

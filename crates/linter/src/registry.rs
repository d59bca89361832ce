/// Registry of the built-in rules and the runtime rule table hosts own.
use crate::config::LintConfig;
use crate::diagnostics::Severity;
use crate::rules::{
    ApiInfoSchemaRule, CountResourceTypesRule, LocationHeaderRule, OverrideSeverityRule,
    ProblemDetailsResponsesRule, ProblemSchemaRule,
};
use crate::traits::{RegistryLintRule, TargetLintRule};
use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

/// Lazily initialized pure rules.
/// Rules are created once and reused across all calls.
static TARGET_RULES: LazyLock<Vec<Arc<dyn TargetLintRule>>> = LazyLock::new(|| {
    vec![
        Arc::new(ProblemDetailsResponsesRule),
        Arc::new(ProblemSchemaRule),
        Arc::new(ApiInfoSchemaRule),
        Arc::new(CountResourceTypesRule),
        Arc::new(LocationHeaderRule),
    ]
});

/// Lazily initialized registry-mutating rules.
static REGISTRY_RULES: LazyLock<Vec<Arc<dyn RegistryLintRule>>> =
    LazyLock::new(|| vec![Arc::new(OverrideSeverityRule)]);

#[must_use]
pub fn target_rules() -> &'static [Arc<dyn TargetLintRule>] {
    &TARGET_RULES
}

#[must_use]
pub fn registry_rules() -> &'static [Arc<dyn RegistryLintRule>] {
    &REGISTRY_RULES
}

#[must_use]
pub fn all_rule_names() -> Vec<&'static str> {
    let mut names = Vec::new();

    for rule in target_rules() {
        names.push(rule.name());
    }
    for rule in registry_rules() {
        names.push(rule.name());
    }

    names.sort_unstable();
    names
}

/// Live definition of a rule for one lint run: its effective severity and
/// the message shown with its findings. Mutated in place by the severity
/// override engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDefinition {
    pub severity: Severity,
    pub message: String,
}

impl RuleDefinition {
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// The host-lifetime rule table: rule id to live definition.
///
/// Backed by a `BTreeMap` so iteration order is deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: BTreeMap<String, RuleDefinition>,
}

impl RuleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a registry from the built-in rules, applying config overrides.
    /// Rules absent from the config keep their `default_severity()` and an
    /// empty message.
    #[must_use]
    pub fn from_config(config: &LintConfig) -> Self {
        let mut registry = Self::new();
        for rule in target_rules() {
            registry.seed(rule.name(), rule.default_severity(), config);
        }
        for rule in registry_rules() {
            registry.seed(rule.name(), rule.default_severity(), config);
        }
        registry
    }

    fn seed(&mut self, name: &str, default_severity: Severity, config: &LintConfig) {
        let configured = config.rules.get(name);
        let severity = configured.map_or(default_severity, crate::config::LintRuleConfig::severity);
        let message = configured
            .and_then(|c| c.message())
            .unwrap_or_default()
            .to_string();
        self.insert(name, RuleDefinition::new(severity, message));
    }

    pub fn insert(&mut self, id: impl Into<String>, definition: RuleDefinition) {
        self.rules.insert(id.into(), definition);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RuleDefinition> {
        self.rules.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut RuleDefinition> {
        self.rules.get_mut(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.rules.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleDefinition)> {
        self.rules.iter().map(|(id, def)| (id.as_str(), def))
    }
}

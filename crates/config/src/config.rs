use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Severity labels a bare-string rule entry may use.
const SEVERITY_LABELS: &[&str] = &["error", "warn", "info", "hint", "off"];

/// Minimum similarity before an unknown rule id gets a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A ruleset file: optional presets to extend plus per-rule entries.
///
/// Rule entries stay raw JSON here — a bare severity label, an
/// `[severity, options]` pair, or an object — and are interpreted by the
/// linter crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesetConfig {
    /// Preset ruleset name(s) this config extends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<ExtendsConfig>,

    /// Per-rule configuration keyed by rule id.
    #[serde(default)]
    pub rules: HashMap<String, serde_json::Value>,
}

impl RulesetConfig {
    /// All rule ids this config mentions.
    #[must_use]
    pub fn rule_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Reject rule ids the linter does not know, with a nearest-name
    /// suggestion when one is close enough.
    pub fn validate_rule_ids(&self, known_rules: &[&str]) -> Result<()> {
        for id in self.rule_ids() {
            if !known_rules.contains(&id) {
                return Err(ConfigError::UnknownRule {
                    rule: id.to_string(),
                    suggestion: suggest(id, known_rules),
                });
            }
        }
        Ok(())
    }

    /// Check that bare-string rule entries are valid severity labels.
    pub(crate) fn validate_severity_labels(&self) -> std::result::Result<(), String> {
        for (id, entry) in &self.rules {
            if let Some(label) = entry.as_str() {
                if !SEVERITY_LABELS.contains(&label) {
                    return Err(format!(
                        "rule `{id}` has unknown severity `{label}` (expected one of: {})",
                        SEVERITY_LABELS.join(", ")
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Preset reference(s) under `extends`: a single name or a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtendsConfig {
    Preset(String),
    Presets(Vec<String>),
}

impl ExtendsConfig {
    /// All referenced preset names.
    #[must_use]
    pub fn presets(&self) -> Vec<&str> {
        match self {
            Self::Preset(name) => vec![name.as_str()],
            Self::Presets(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

/// Nearest known rule id by Jaro-Winkler similarity, when close enough to
/// be a plausible typo.
fn suggest(unknown: &str, known: &[&str]) -> Option<String> {
    known
        .iter()
        .map(|candidate| (strsim::jaro_winkler(unknown, candidate), *candidate))
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .map(|(_, candidate)| candidate.to_string())
}

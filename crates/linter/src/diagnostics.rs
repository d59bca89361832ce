use serde::{Deserialize, Serialize};

/// Severity of a rule as configured in the hosting linter.
///
/// Ordered from most to least severe; `Error` compares lowest, matching the
/// numeric severity enums used by Spectral-family hosts (error = 0).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    #[default]
    Warn,
    Info,
    Hint,
    /// The rule is disabled entirely.
    Off,
}

impl Severity {
    /// Lowercase label as it appears in ruleset files and downgrade messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Hint => "hint",
            Self::Off => "off",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "hint" => Ok(Self::Hint),
            "off" => Ok(Self::Off),
            other => Err(format!("unknown severity label `{other}`")),
        }
    }
}

/// One step in a JSON path from the document root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member access by key.
    Key(String),
    /// Array element access by index.
    Index(usize),
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Render a path in dotted form, e.g. `metadata.x-api-type`.
#[must_use]
pub fn dotted(path: &[PathSegment]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

/// A single result returned by a rule function.
///
/// Diagnostics carry no severity of their own; severity is a property the
/// host associates with the rule. An empty result list means "no violation".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable description of the violation.
    pub message: String,
    /// Path from the document root to the offending node, when meaningful.
    pub path: Option<Vec<PathSegment>>,
}

impl Diagnostic {
    /// Create a diagnostic with no explicit path (the host falls back to the
    /// path of the node the rule was bound to).
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }

    /// Attach a path pinpointing the offending node.
    #[must_use]
    pub fn at(mut self, path: Vec<PathSegment>) -> Self {
        self.path = Some(path);
        self
    }
}

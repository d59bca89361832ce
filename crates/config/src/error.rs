use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Failures while locating, reading or parsing a ruleset file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported config format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("invalid config at {path}: {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("unknown rule `{rule}`{}", .suggestion.as_deref().map(|s| format!(" (did you mean `{s}`?)")).unwrap_or_default())]
    UnknownRule {
        rule: String,
        suggestion: Option<String>,
    },
}

use thiserror::Error;

/// Failure of a rule invocation itself, as opposed to a finding about the
/// document. The host surfaces these as rule-execution failures.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The rule was invoked with options it cannot work with. Fatal to the
    /// single invocation; malformed *documents* never produce this.
    #[error("invalid rule options: {0}")]
    InvalidOptions(String),
}

//! Assertion helpers for diagnostic lists.
//!
//! Rule tests mostly assert on message substrings; these helpers render a
//! diagnostic list into a readable block for failure output.

/// Format a list of diagnostics for assertion failure output.
///
/// # Example
///
/// ```ignore
/// let diagnostics = rule.check(&target, None, &ctx);
/// assert!(diagnostics.is_empty(), "{}", format_diagnostics(&diagnostics));
/// ```
pub fn format_diagnostics<D: std::fmt::Debug>(diagnostics: &[D]) -> String {
    if diagnostics.is_empty() {
        return String::from("(no diagnostics)");
    }

    diagnostics
        .iter()
        .enumerate()
        .map(|(i, d)| format!("[{}] {d:?}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format diagnostic messages only, without paths.
pub fn format_diagnostic_messages<T: AsRef<str>>(messages: &[T]) -> String {
    if messages.is_empty() {
        return String::from("(no diagnostics)");
    }

    messages
        .iter()
        .enumerate()
        .map(|(i, m)| format!("[{}] {}", i + 1, m.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

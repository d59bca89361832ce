use crate::diagnostics::{PathSegment, Severity};
use serde_json::Value;

/// Host-supplied metadata for one rule invocation.
///
/// The hosting linter owns document parsing and node selection; rules only
/// see the bound value plus this context.
#[derive(Debug, Clone, Copy)]
pub struct LintContext<'a> {
    /// Root data of the document under lint, when the host has it resolved.
    pub document: Option<&'a Value>,
    /// Raw source bytes of the document, when the host carries them. Used
    /// as a fallback for local reference resolution.
    pub raw: Option<&'a [u8]>,
    /// JSON path of the node the rule was bound to.
    pub path: &'a [PathSegment],
    /// Configured severity of the invoking rule.
    pub severity: Severity,
}

impl<'a> LintContext<'a> {
    /// Context with no document, no raw bytes and an empty path.
    #[must_use]
    pub const fn new(severity: Severity) -> Self {
        Self {
            document: None,
            raw: None,
            path: &[],
            severity,
        }
    }

    #[must_use]
    pub fn with_document(mut self, document: &'a Value) -> Self {
        self.document = Some(document);
        self
    }

    #[must_use]
    pub fn with_raw(mut self, raw: &'a [u8]) -> Self {
        self.raw = Some(raw);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: &'a [PathSegment]) -> Self {
        self.path = path;
        self
    }
}

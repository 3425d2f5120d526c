//! Diagnostics for hand-written page sources: constructs a page cannot hold
//! (lists, code, images, raw HTML), broken links, and formatting that is
//! flattened to plain text.

use std::fmt;
use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};

/// A problem found in a page source, located by byte span.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub span: Range<usize>,
    pub file_id: usize,
    pub severity: Severity,
    pub notes: Vec<String>,
}

impl ParseError {
    fn new(severity: Severity, message: String, span: Range<usize>, file_id: usize) -> Self {
        ParseError {
            message,
            span,
            file_id,
            severity,
            notes: Vec::new(),
        }
    }

    /// The page is rejected.
    pub fn error(message: impl Into<String>, span: Range<usize>, file_id: usize) -> Self {
        Self::new(Severity::Error, message.into(), span, file_id)
    }

    /// The page is kept, but renders differently from its source.
    pub fn warning(message: impl Into<String>, span: Range<usize>, file_id: usize) -> Self {
        Self::new(Severity::Warning, message.into(), span, file_id)
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity >= Severity::Error
    }

    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        Diagnostic::new(self.severity)
            .with_message(&self.message)
            .with_labels(vec![Label::primary(self.file_id, self.span.clone())])
            .with_notes(self.notes.clone())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_error() { "error" } else { "warning" };
        write!(f, "{} at {}..{}: {}", kind, self.span.start, self.span.end, self.message)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_severity_and_span() {
        let error = ParseError::error("unsupported list in page source", 4..9, 0);
        assert_eq!(error.to_string(), "error at 4..9: unsupported list in page source");
        let warning = ParseError::warning("emphasis is rendered as plain text", 0..3, 0);
        assert_eq!(warning.to_string(), "warning at 0..3: emphasis is rendered as plain text");
        assert!(error.is_error());
        assert!(!warning.is_error());
    }

    #[test]
    fn diagnostic_carries_label_and_notes() {
        let diagnostic = ParseError::error("bad", 2..5, 7).with_note("hint").to_diagnostic();
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.message, "bad");
        assert_eq!(diagnostic.notes, vec!["hint".to_string()]);
        assert_eq!(diagnostic.labels.len(), 1);
        assert_eq!(diagnostic.labels[0].file_id, 7);
        assert_eq!(diagnostic.labels[0].range, 2..5);
    }
}

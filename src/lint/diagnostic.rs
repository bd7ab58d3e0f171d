//! Lint diagnostic messages.

use super::rule::{RuleId, Severity};
use super::span::Span;

/// A finding produced by a lint rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    pub severity: Severity,
    pub message: String,
    /// Location inside the project, relative to its root.
    pub span: Option<Span>,
    /// How to resolve the finding.
    pub suggestion: Option<String>,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            span: None,
            suggestion: None,
        }
    }

    /// Add a source span to this diagnostic.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Whether this diagnostic fails a lint run.
    pub fn is_failure(&self, strict: bool) -> bool {
        match self.severity {
            Severity::Error => true,
            Severity::Warning => strict,
            Severity::Hint => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_creation() {
        let diag = LintDiagnostic::new(
            RuleId::new("required-files"),
            Severity::Warning,
            "Missing LICENSE",
        );

        assert_eq!(diag.rule_id, RuleId::new("required-files"));
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.message, "Missing LICENSE");
        assert!(diag.suggestion.is_none());
        assert!(diag.span.is_none());
    }

    #[test]
    fn diagnostic_builder_pattern() {
        let diag = LintDiagnostic::new(
            RuleId::new("unrendered-placeholder"),
            Severity::Error,
            "Unrendered placeholder",
        )
        .with_span(Span::line("setup.py", 10))
        .with_suggestion("Replace it with the intended value");

        assert_eq!(diag.span.unwrap().start_line, 10);
        assert_eq!(
            diag.suggestion.as_deref(),
            Some("Replace it with the intended value")
        );
    }

    #[test]
    fn failure_depends_on_severity_and_strictness() {
        let error = LintDiagnostic::new(RuleId::new("a"), Severity::Error, "e");
        let warning = LintDiagnostic::new(RuleId::new("b"), Severity::Warning, "w");
        let hint = LintDiagnostic::new(RuleId::new("c"), Severity::Hint, "h");

        assert!(error.is_failure(false));
        assert!(!warning.is_failure(false));
        assert!(warning.is_failure(true));
        assert!(!hint.is_failure(true));
    }
}

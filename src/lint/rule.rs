//! Lint rule definitions.
//!
//! - [`LintRule`] - The trait every project check implements
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for diagnostics (Hint, Warning, Error)

use super::context::LintContext;
use super::diagnostic::LintDiagnostic;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational hint, never fails a lint run.
    Hint,
    /// Convention not followed; fails only under `--strict`.
    Warning,
    /// The project is broken or half-rendered.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Hint => write!(f, "hint"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A check run against a generated project.
///
/// Each rule looks for one kind of issue and produces a diagnostic per
/// finding.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Default severity for this rule.
    fn default_severity(&self) -> Severity;

    /// Check the project and return any diagnostics.
    fn check(&self, ctx: &LintContext) -> Vec<LintDiagnostic>;

    /// Build a diagnostic for this rule at its default severity.
    fn diagnostic(&self, message: impl Into<String>) -> LintDiagnostic
    where
        Self: Sized,
    {
        LintDiagnostic::new(self.id(), self.default_severity(), message)
    }
}

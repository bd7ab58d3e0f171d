//! Project linting.
//!
//! Checks a generated project against the conventions its template sets up.
//!
//! # Overview
//!
//! - **Rules** - Individual checks ([`LintRule`] trait)
//! - **Context** - The project under inspection ([`LintContext`])
//! - **Registry** - Collection of all available rules ([`RuleRegistry`])
//! - **Diagnostics** - Findings with severity and suggestions ([`LintDiagnostic`])
//!
//! # Example
//!
//! ```
//! use forgeplate::lint::{RuleId, RuleRegistry, Severity};
//!
//! let registry = RuleRegistry::with_builtins();
//! assert!(registry.get(&RuleId::new("todo-marker")).is_some());
//!
//! // Severity has ordering
//! assert!(Severity::Hint < Severity::Warning);
//! assert!(Severity::Warning < Severity::Error);
//! ```

pub mod context;
pub mod diagnostic;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod span;

pub use context::{LintContext, ProjectFile, SKIPPED_DIRS};
pub use diagnostic::LintDiagnostic;
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use registry::RuleRegistry;
pub use rule::{LintRule, RuleId, Severity};
pub use rules::{
    KnownTemplateRule, RequiredFilesRule, TemplateOutdatedRule, TodoMarkerRule,
    UnrenderedPlaceholderRule, VersionConsistencyRule,
};
pub use span::Span;

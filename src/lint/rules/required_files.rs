//! Required project files.
//!
//! Every generated project ships a README, a license and a changelog.

use crate::lint::{LintContext, LintDiagnostic, LintRule, RuleId, Severity};

/// Each group is satisfied by any one of its files.
const REQUIRED: &[&[&str]] = &[&["README.md", "README.rst"], &["LICENSE"], &["CHANGELOG.md"]];

/// Checks that the standard project files exist.
pub struct RequiredFilesRule;

impl LintRule for RequiredFilesRule {
    fn id(&self) -> RuleId {
        RuleId::new("required-files")
    }

    fn name(&self) -> &str {
        "Required Files"
    }

    fn description(&self) -> &str {
        "Ensures the project has a README, a LICENSE and a CHANGELOG"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &LintContext) -> Vec<LintDiagnostic> {
        REQUIRED
            .iter()
            .filter(|group| !group.iter().any(|name| ctx.has_file(name)))
            .map(|group| {
                self.diagnostic(format!("Missing required file: {}", group.join(" or ")))
                    .with_suggestion(format!("Add {} at the project root", group[0]))
            })
            .collect()
    }
}

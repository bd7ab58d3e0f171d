//! Version consistency validation.
//!
//! Every file listed under `bump.files` must carry the project version,
//! otherwise `bump-version` would silently skip it.

use std::fs;

use crate::lint::{LintContext, LintDiagnostic, LintRule, RuleId, Severity, Span};
use crate::project::{version_positions, NO_BUMP_MARKER, PROJECT_FILE};

/// Checks that bump files exist and contain the current version.
pub struct VersionConsistencyRule;

impl LintRule for VersionConsistencyRule {
    fn id(&self) -> RuleId {
        RuleId::new("version-consistency")
    }

    fn name(&self) -> &str {
        "Version Consistency"
    }

    fn description(&self) -> &str {
        "Ensures every bump file exists and contains the project version"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &LintContext) -> Vec<LintDiagnostic> {
        let version = ctx.config().version.to_string();
        let mut diagnostics = Vec::new();

        for relative in &ctx.config().bump.files {
            let content = match fs::read_to_string(ctx.root().join(relative)) {
                Ok(content) => content,
                Err(e) => {
                    diagnostics.push(
                        self.diagnostic(format!(
                            "Bump file '{}' cannot be read: {}",
                            relative.display(),
                            e
                        ))
                        .with_span(Span::file(PROJECT_FILE))
                        .with_suggestion(format!(
                            "Restore the file or remove it from bump.files in {}",
                            PROJECT_FILE
                        )),
                    );
                    continue;
                }
            };

            let found = content.lines().any(|line| {
                !line.contains(NO_BUMP_MARKER)
                    && version_positions(line, &version).next().is_some()
            });
            if !found {
                diagnostics.push(
                    self.diagnostic(format!(
                        "'{}' does not contain the project version {}",
                        relative.display(),
                        version
                    ))
                    .with_span(Span::file(relative))
                    .with_suggestion(format!(
                        "Set the version in this file to {} or remove it from bump.files",
                        version
                    )),
                );
            }
        }

        diagnostics
    }
}

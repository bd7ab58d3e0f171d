//! TODO comments left by templates for the user.

use regex::Regex;
use std::sync::LazyLock;

use crate::lint::{LintContext, LintDiagnostic, LintRule, RuleId, Severity, Span};

/// A comment opener followed by `TODO`.
static TODO_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(#|//|/\*|<!--|--|%|;)\s*TODO\b").unwrap());

/// Lists the TODO comments in project text files.
pub struct TodoMarkerRule;

impl LintRule for TodoMarkerRule {
    fn id(&self) -> RuleId {
        RuleId::new("todo-marker")
    }

    fn name(&self) -> &str {
        "TODO Marker"
    }

    fn description(&self) -> &str {
        "Reports TODO comments that still need attention"
    }

    fn default_severity(&self) -> Severity {
        Severity::Hint
    }

    fn check(&self, ctx: &LintContext) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for file in ctx.files() {
            for (index, line) in file.content.lines().enumerate() {
                let Some(found) = TODO_COMMENT.find(line) else {
                    continue;
                };
                let col = line[..found.start()].chars().count() + 1;
                let text = line[found.start()..].trim();
                diagnostics.push(
                    self.diagnostic(format!("TODO comment: {}", text))
                        .with_span(Span::at(
                            &file.path,
                            index + 1,
                            col,
                            found.as_str().chars().count(),
                        )),
                );
            }
        }

        diagnostics
    }
}

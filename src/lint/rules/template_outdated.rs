//! Template freshness.

use std::cmp::Ordering;

use crate::lint::{LintContext, LintDiagnostic, LintRule, RuleId, Severity, Span};
use crate::project::PROJECT_FILE;
use crate::version::{compare, parse_version};

/// Hints when the registry carries a newer version of the project's template.
pub struct TemplateOutdatedRule;

impl LintRule for TemplateOutdatedRule {
    fn id(&self) -> RuleId {
        RuleId::new("template-outdated")
    }

    fn name(&self) -> &str {
        "Template Outdated"
    }

    fn description(&self) -> &str {
        "Reports projects generated from an older template version"
    }

    fn default_severity(&self) -> Severity {
        Severity::Hint
    }

    fn check(&self, ctx: &LintContext) -> Vec<LintDiagnostic> {
        let config = ctx.config();
        let Some(record) = ctx
            .registry()
            .resolve(&config.template_handle.to_lowercase())
            .ok()
            .and_then(|node| node.as_record())
        else {
            return Vec::new();
        };

        let latest = match parse_version(&record.version) {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!("Skipping freshness check for {}: {}", record.handle, e);
                return Vec::new();
            }
        };

        if compare(&config.template_version, &latest) != Ordering::Less {
            return Vec::new();
        }

        vec![self
            .diagnostic(format!(
                "Generated from {} {}, but {} is available",
                record.handle, config.template_version, latest
            ))
            .with_span(Span::file(PROJECT_FILE))]
    }
}

//! Template handle validation.

use crate::lint::{LintContext, LintDiagnostic, LintRule, RuleId, Severity, Span};
use crate::project::PROJECT_FILE;
use crate::registry::{all_leaf_handles, most_similar, Node};

/// Checks that the project's template handle names a single template.
pub struct KnownTemplateRule;

impl LintRule for KnownTemplateRule {
    fn id(&self) -> RuleId {
        RuleId::new("known-template")
    }

    fn name(&self) -> &str {
        "Known Template"
    }

    fn description(&self) -> &str {
        "Ensures template_handle resolves to a template in the registry"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &LintContext) -> Vec<LintDiagnostic> {
        let handle = ctx.config().template_handle.to_lowercase();
        let registry = ctx.registry();

        let diagnostic = match registry.resolve(&handle) {
            Ok(Node::Leaf(_)) => return Vec::new(),
            Ok(Node::Branch(_)) => self.diagnostic(format!(
                "Template handle '{}' names a group of templates, not a single template",
                handle
            )),
            Err(_) => {
                let diag =
                    self.diagnostic(format!("Template '{}' is not in the registry", handle));
                let handles = all_leaf_handles(registry.root());
                match most_similar(&handle, handles.iter().map(String::as_str)).first() {
                    Some(similar) => diag.with_suggestion(format!("Did you mean '{}'?", similar)),
                    None => diag,
                }
            }
        };

        vec![diagnostic.with_span(Span::file(PROJECT_FILE))]
    }
}

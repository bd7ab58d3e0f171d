//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores the available lint rules and runs them
//! against a project.

use std::collections::HashMap;

use super::context::LintContext;
use super::diagnostic::LintDiagnostic;
use super::rule::{LintRule, RuleId};
use super::rules::{
    KnownTemplateRule, RequiredFilesRule, TemplateOutdatedRule, TodoMarkerRule,
    UnrenderedPlaceholderRule, VersionConsistencyRule,
};

/// Registry of all available lint rules.
pub struct RuleRegistry {
    rules: HashMap<RuleId, Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Create a registry with all built-in rules.
    ///
    /// Rules that need the template registry read it from the
    /// [`LintContext`], so none of them is configured here.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(RequiredFilesRule));
        registry.register(Box::new(VersionConsistencyRule));
        registry.register(Box::new(UnrenderedPlaceholderRule));
        registry.register(Box::new(KnownTemplateRule));
        registry.register(Box::new(TemplateOutdatedRule));
        registry.register(Box::new(TodoMarkerRule));
        registry
    }

    /// Register a lint rule, replacing any rule with the same id.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.insert(rule.id(), rule);
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.get(id).map(|r| r.as_ref())
    }

    /// Iterate over all rules.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.values().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule and return the diagnostics, most severe first.
    ///
    /// Within a severity, diagnostics are grouped by rule id and keep the
    /// order the rule produced them in.
    pub fn check_all(&self, ctx: &LintContext) -> Vec<LintDiagnostic> {
        let mut diagnostics: Vec<LintDiagnostic> =
            self.iter().flat_map(|rule| rule.check(ctx)).collect();
        diagnostics.sort_by(|a, b| {
            b.severity
                .cmp(&a.severity)
                .then_with(|| a.rule_id.0.cmp(&b.rule_id.0))
        });
        diagnostics
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

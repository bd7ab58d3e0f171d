//! Leftover template syntax.
//!
//! A placeholder that survived generation means the template was rendered
//! with a missing variable or a file was copied verbatim.

use crate::lint::{LintContext, LintDiagnostic, LintRule, RuleId, Severity, Span};

/// Fragments that only appear in unrendered template files.
pub const PLACEHOLDER_PATTERNS: &[&str] = &["{{ cookiecutter.", "{{cookiecutter.", "{% "];

/// Reports template syntax left in project files.
pub struct UnrenderedPlaceholderRule;

impl LintRule for UnrenderedPlaceholderRule {
    fn id(&self) -> RuleId {
        RuleId::new("unrendered-placeholder")
    }

    fn name(&self) -> &str {
        "Unrendered Placeholder"
    }

    fn description(&self) -> &str {
        "Ensures no template placeholders are left in project files"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &LintContext) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for file in ctx.files() {
            for (index, line) in file.content.lines().enumerate() {
                let Some((byte_col, pattern)) = first_placeholder(line) else {
                    continue;
                };
                let col = line[..byte_col].chars().count() + 1;
                diagnostics.push(
                    self.diagnostic(format!("Unrendered template placeholder '{}'", pattern.trim()))
                        .with_span(Span::at(
                            &file.path,
                            index + 1,
                            col,
                            pattern.chars().count(),
                        ))
                        .with_suggestion("Replace the placeholder with the intended value"),
                );
            }
        }

        diagnostics
    }
}

/// The leftmost placeholder on a line, with its byte offset.
fn first_placeholder(line: &str) -> Option<(usize, &'static str)> {
    PLACEHOLDER_PATTERNS
        .iter()
        .filter_map(|pattern| line.find(pattern).map(|pos| (pos, *pattern)))
        .min_by_key(|(pos, _)| *pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::context::tests::{context, project};

    #[test]
    fn reports_placeholder_with_location() {
        let temp = project(&[(
            "setup.py",
            b"version='0.1.0'\nname='{{ cookiecutter.project_slug }}'\n",
        )]);
        let diagnostics = UnrenderedPlaceholderRule.check(&context(&temp));

        assert_eq!(diagnostics.len(), 1);
        let span = diagnostics[0].span.as_ref().unwrap();
        assert_eq!(span.file, std::path::PathBuf::from("setup.py"));
        assert_eq!(span.start_line, 2);
        assert_eq!(span.start_col, 7);
    }

    #[test]
    fn detects_every_pattern() {
        let temp = project(&[
            ("a.txt", b"{{cookiecutter.x}}"),
            ("b.txt", b"{% if x %}"),
            ("c.txt", b"{{ cookiecutter.y }}"),
        ]);
        assert_eq!(UnrenderedPlaceholderRule.check(&context(&temp)).len(), 3);
    }

    #[test]
    fn one_diagnostic_per_line() {
        let temp = project(&[("a.txt", b"{{ cookiecutter.a }} {{ cookiecutter.b }}")]);
        assert_eq!(UnrenderedPlaceholderRule.check(&context(&temp)).len(), 1);
    }

    #[test]
    fn other_braces_are_fine() {
        let temp = project(&[("a.txt", b"{{ name }} and {%d} and {%}")]);
        assert!(UnrenderedPlaceholderRule.check(&context(&temp)).is_empty());
    }

    #[test]
    fn column_counts_characters() {
        let line = "é {% x %}";
        let (byte_col, _) = first_placeholder(line).unwrap();
        assert_eq!(line[..byte_col].chars().count() + 1, 3);
    }
}

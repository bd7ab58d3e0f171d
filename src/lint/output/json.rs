//! JSON output for `forgeplate lint --format json`.
//!
//! The document names the project and template it describes, so reports
//! collected from several projects stay attributable:
//!
//! ```json
//! {
//!   "project": { "name": "demo", "template": "cli-python", ... },
//!   "diagnostics": [ { "rule": "todo-marker", "severity": "hint", ... } ],
//!   "summary": { "errors": 0, "warnings": 0, "hints": 1 }
//! }
//! ```

use serde::Serialize;
use std::io::Write;

use super::LintFormatter;
use crate::lint::{LintDiagnostic, Severity};
use crate::project::ProjectConfig;

/// Formats lint output as a single JSON document.
#[derive(Debug, Default)]
pub struct JsonFormatter {
    project: Option<ProjectConfig>,
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<ProjectHeader<'a>>,
    diagnostics: Vec<Entry<'a>>,
    summary: Summary,
}

#[derive(Serialize)]
struct ProjectHeader<'a> {
    name: &'a str,
    template: &'a str,
    template_version: String,
    version: String,
}

#[derive(Serialize)]
struct Entry<'a> {
    rule: &'a str,
    severity: String,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<&'a str>,
}

#[derive(Serialize)]
struct Summary {
    errors: usize,
    warnings: usize,
    hints: usize,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Include `config`'s name, template and versions in the document.
    pub fn for_project(config: &ProjectConfig) -> Self {
        Self {
            project: Some(config.clone()),
        }
    }
}

impl<'a> From<&'a LintDiagnostic> for Entry<'a> {
    fn from(diag: &'a LintDiagnostic) -> Self {
        Self {
            rule: &diag.rule_id.0,
            severity: diag.severity.to_string(),
            message: &diag.message,
            location: diag.span.as_ref().map(|span| {
                format!(
                    "{}:{}",
                    span.file.to_string_lossy().replace('\\', "/"),
                    span.start_line
                )
            }),
            help: diag.suggestion.as_deref(),
        }
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let count = |severity: Severity| {
            diagnostics
                .iter()
                .filter(|d| d.severity == severity)
                .count()
        };

        let report = Report {
            project: self.project.as_ref().map(|config| ProjectHeader {
                name: &config.project_name,
                template: &config.template_handle,
                template_version: config.template_version.to_string(),
                version: config.version.to_string(),
            }),
            diagnostics: diagnostics.iter().map(Entry::from).collect(),
            summary: Summary {
                errors: count(Severity::Error),
                warnings: count(Severity::Warning),
                hints: count(Severity::Hint),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &report).map_err(std::io::Error::other)?;
        writeln!(writer)
    }
}

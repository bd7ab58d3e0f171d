//! Human-readable output formatter.
//!
//! Mirrors compiler diagnostics: a `severity[rule]: message` header, then
//! location and help lines.

use super::LintFormatter;
use crate::lint::{LintDiagnostic, Severity};
use std::io::Write;

/// Formats lint output for terminal display. Styling is left to the UI.
#[derive(Debug, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        for diag in diagnostics {
            writeln!(
                writer,
                "{}[{}]: {}",
                diag.severity, diag.rule_id, diag.message
            )?;

            if let Some(ref span) = diag.span {
                writeln!(
                    writer,
                    "  --> {}:{}:{}",
                    span.file.display(),
                    span.start_line,
                    span.start_col
                )?;
            }

            if let Some(ref suggestion) = diag.suggestion {
                writeln!(writer, "   = help: {}", suggestion)?;
            }

            writeln!(writer)?;
        }

        let count = |severity: Severity| {
            diagnostics
                .iter()
                .filter(|d| d.severity == severity)
                .count()
        };
        let (errors, warnings, hints) = (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Hint),
        );

        if errors > 0 || warnings > 0 {
            write!(writer, "Found {} error(s) and {} warning(s)", errors, warnings)?;
            if hints > 0 {
                write!(writer, ", plus {} hint(s)", hints)?;
            }
            writeln!(writer)?;
        } else if hints > 0 {
            writeln!(writer, "Found {} hint(s)", hints)?;
        }

        Ok(())
    }
}

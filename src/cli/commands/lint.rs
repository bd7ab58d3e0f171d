//! Lint command implementation.
//!
//! The `forgeplate lint` command checks a generated project against the
//! conventions of its template.

use std::path::{Path, PathBuf};

use crate::cli::args::LintArgs;
use crate::error::{ForgeError, Result};
use crate::lint::{
    HumanFormatter, JsonFormatter, LintContext, LintDiagnostic, LintFormatter, OutputFormat,
    RuleRegistry, Severity,
};
use crate::project::ProjectConfig;
use crate::registry::Registry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Diagnostics for one project, with the metadata they were checked against.
#[derive(Debug)]
pub struct LintReport {
    pub project: ProjectConfig,
    pub diagnostics: Vec<LintDiagnostic>,
}

/// Run every built-in rule against the project at `project_dir`.
pub fn lint_project(project_dir: &Path, registry: Registry) -> Result<LintReport> {
    let ctx = LintContext::load(project_dir, registry)?;
    let diagnostics = RuleRegistry::with_builtins().check_all(&ctx);
    tracing::debug!(
        "Lint of {} produced {} diagnostic(s)",
        project_dir.display(),
        diagnostics.len()
    );
    Ok(LintReport {
        project: ctx.config().clone(),
        diagnostics,
    })
}

/// Render a report with the formatter for `format`.
pub fn format_report(report: &LintReport, format: OutputFormat) -> String {
    let mut output = Vec::new();

    let written = match format {
        OutputFormat::Json => {
            JsonFormatter::for_project(&report.project).format(&report.diagnostics, &mut output)
        }
        OutputFormat::Human => HumanFormatter::new().format(&report.diagnostics, &mut output),
    };
    if let Err(e) = written {
        tracing::debug!("Failed to format lint output: {}", e);
    }

    String::from_utf8(output).unwrap_or_default()
}

/// The lint command implementation.
pub struct LintCommand {
    project_root: PathBuf,
    args: LintArgs,
    registry: Option<Registry>,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(project_root: &Path, args: LintArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            registry: None,
        }
    }

    /// Create a lint command that checks templates against `registry`.
    pub fn with_registry(project_root: &Path, args: LintArgs, registry: Registry) -> Self {
        Self {
            registry: Some(registry),
            ..Self::new(project_root, args)
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LintArgs {
        &self.args
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let format: OutputFormat = self
            .args
            .format
            .parse()
            .map_err(|message| ForgeError::ConfigValidationError { message })?;

        let registry = match &self.registry {
            Some(registry) => registry.clone(),
            None => super::load_registry()?,
        };

        let report = match lint_project(&self.project_root, registry) {
            Ok(report) => report,
            Err(ForgeError::ProjectNotFound { path }) => {
                ui.error(&format!("No forgeplate project found at {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(ForgeError::ConfigParseError { path, message }) => {
                ui.error(&format!("Parse error in {}: {}", path.display(), message));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let diagnostics = &report.diagnostics;
        let has_errors = diagnostics.iter().any(|d| d.severity == Severity::Error);
        let has_warnings = diagnostics.iter().any(|d| d.severity == Severity::Warning);
        let should_fail = has_errors || (self.args.strict && has_warnings);

        if diagnostics.is_empty() && format == OutputFormat::Human {
            ui.success("Project follows its template's conventions!");
            return Ok(CommandResult::success());
        }

        let output = format_report(&report, format);

        match format {
            OutputFormat::Human => {
                for line in output.lines() {
                    if line.starts_with("error") {
                        ui.error(line);
                    } else if line.starts_with("warning") {
                        ui.warning(line);
                    } else {
                        ui.message(line);
                    }
                }
            }
            OutputFormat::Json => ui.message(&output),
        }

        if should_fail {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

//! Bump-version command implementation.
//!
//! The `forgeplate bump-version` command validates a requested version
//! against the project's current one, asks before unusual jumps and then
//! rewrites every file that carries the version.

use std::path::{Path, PathBuf};

use crate::cli::args::BumpVersionArgs;
use crate::error::{ForgeError, Result};
use crate::lint::{LintContext, RuleRegistry, Severity};
use crate::project::{ProjectConfig, VersionBumper};
use crate::registry::Registry;
use crate::ui::{Prompt, UserInterface};
use crate::version::assess_bump;

use super::dispatcher::{Command, CommandResult};

/// Prompt key for confirming an unusual version jump.
pub const CONFIRM_BUMP_KEY: &str = "confirm_bump";

/// The bump-version command implementation.
pub struct BumpVersionCommand {
    project_root: PathBuf,
    args: BumpVersionArgs,
    registry: Option<Registry>,
}

impl BumpVersionCommand {
    /// Create a new bump-version command for the project at `project_root`.
    pub fn new(project_root: &Path, args: BumpVersionArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            registry: None,
        }
    }

    /// Create a bump-version command whose pre-bump lint uses `registry`.
    pub fn with_registry(project_root: &Path, args: BumpVersionArgs, registry: Registry) -> Self {
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
    pub fn args(&self) -> &BumpVersionArgs {
        &self.args
    }

    /// Lint the project and report findings as warnings. Never blocks.
    fn lint_before_bump(&self, config: &ProjectConfig, ui: &mut dyn UserInterface) -> Result<()> {
        let registry = match &self.registry {
            Some(registry) => registry.clone(),
            None => super::load_registry()?,
        };
        let ctx = LintContext::new(&self.project_root, config.clone(), registry)?;
        let diagnostics = RuleRegistry::with_builtins().check_all(&ctx);

        let mut reported = 0;
        for diag in diagnostics.iter().filter(|d| d.severity >= Severity::Warning) {
            let location = diag
                .span
                .as_ref()
                .map(|s| format!(" ({}:{})", s.file.display(), s.start_line))
                .unwrap_or_default();
            ui.warning(&format!("[{}] {}{}", diag.rule_id, diag.message, location));
            reported += 1;
        }

        if reported > 0 {
            ui.hint("Run 'forgeplate lint' for details.");
        }
        Ok(())
    }

    fn show_project_version(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match ProjectConfig::load(&self.project_root) {
            Ok(config) => config,
            Err(e @ ForgeError::ProjectNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        ui.message(&config.version.to_string());
        Ok(CommandResult::success())
    }
}

impl Command for BumpVersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.project_version {
            return self.show_project_version(ui);
        }

        let Some(new_version) = self.args.new_version.as_deref() else {
            ui.error("Missing the version to bump to");
            ui.hint("Usage: forgeplate bump-version <NEW_VERSION> [PROJECT_DIR]");
            return Ok(CommandResult::failure(1));
        };

        let config = match ProjectConfig::load(&self.project_root) {
            Ok(config) => config,
            Err(e @ (ForgeError::ProjectNotFound { .. } | ForgeError::ConfigParseError { .. })) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        self.lint_before_bump(&config, ui)?;

        let current = config.version;
        let assessment = match assess_bump(&current, new_version, self.args.downgrade) {
            Ok(assessment) => assessment,
            Err(
                e @ (ForgeError::InvalidVersionFormat { .. }
                | ForgeError::NoOpVersion { .. }
                | ForgeError::DowngradeNotAllowed { .. }
                | ForgeError::UpgradeNotAllowed { .. }),
            ) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if !assessment.reasonable && !self.args.yes {
            let question = format!(
                "Bumping from {} to {} seems unusual. Bump anyway?",
                current, assessment.new
            );
            let confirmed = ui
                .prompt(&Prompt::confirm(CONFIRM_BUMP_KEY, question, false))?
                .as_bool();
            if !confirmed {
                ui.message("Version bump cancelled.");
                return Ok(CommandResult::success());
            }
        }

        let project_name = config.project_name.clone();
        let mut bumper = VersionBumper::new(&self.project_root, config);
        let report = bumper.bump(assessment.new)?;

        ui.success(&format!(
            "Bumped {} from {} to {}",
            project_name, report.previous, report.new
        ));

        if ui.output_mode().shows_details() {
            for change in &report.files {
                ui.message(&format!(
                    "  {}: {} replacement(s)",
                    change.path.display(),
                    change.replacements
                ));
            }
            if report.changelog_updated {
                ui.message(&format!("  Added a {} section to the changelog", report.new));
            }
        }

        if report.total_replacements() == 0 {
            ui.warning(&format!(
                "No file contained {}; only the project metadata was updated",
                report.previous
            ));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::context::tests::project;
    use crate::ui::{MockUI, OutputMode};
    use crate::version::Version;
    use std::fs;
    use tempfile::TempDir;

    const COMPLETE: &[(&str, &[u8])] = &[
        ("README.md", b"# demo\n"),
        ("LICENSE", b"MIT\n"),
        ("CHANGELOG.md", b"# Changelog\n\n## 0.1.0 (2024-01-01)\n"),
        ("setup.py", b"version='0.1.0'\n"),
    ];

    fn args(new_version: &str) -> BumpVersionArgs {
        BumpVersionArgs {
            new_version: Some(new_version.to_string()),
            ..Default::default()
        }
    }

    fn run(temp: &TempDir, args: BumpVersionArgs, ui: &mut MockUI) -> CommandResult {
        BumpVersionCommand::with_registry(temp.path(), args, Registry::builtin().unwrap())
            .execute(ui)
            .unwrap()
    }

    fn project_version(temp: &TempDir) -> Version {
        ProjectConfig::load(temp.path()).unwrap().version
    }

    #[test]
    fn bumps_a_clean_project() {
        let temp = project(COMPLETE);
        let mut ui = MockUI::new();

        let result = run(&temp, args("0.2.0"), &mut ui);

        assert!(result.success);
        assert!(ui.has_success("Bumped demo from 0.1.0 to 0.2.0"));
        assert!(ui.warnings().is_empty());
        assert!(ui.prompts_shown().is_empty());
        assert_eq!(project_version(&temp), Version::new(0, 2, 0));
        let setup = fs::read_to_string(temp.path().join("setup.py")).unwrap();
        assert_eq!(setup, "version='0.2.0'\n");
        let changelog = fs::read_to_string(temp.path().join("CHANGELOG.md")).unwrap();
        assert!(changelog.contains("## 0.2.0 ("));
    }

    #[test]
    fn prints_project_version() {
        let temp = project(COMPLETE);
        let mut ui = MockUI::new();
        let args = BumpVersionArgs {
            project_version: true,
            ..Default::default()
        };

        let result = run(&temp, args, &mut ui);

        assert!(result.success);
        assert_eq!(ui.messages(), ["0.1.0"]);
    }

    #[test]
    fn rejects_invalid_version() {
        let temp = project(COMPLETE);
        let mut ui = MockUI::new();

        let result = run(&temp, args("1.2"), &mut ui);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Invalid version '1.2'"));
        assert_eq!(project_version(&temp), Version::new(0, 1, 0));
    }

    #[test]
    fn rejects_same_version() {
        let temp = project(COMPLETE);
        let mut ui = MockUI::new();

        let result = run(&temp, args("0.1.0"), &mut ui);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("cannot be equal"));
    }

    #[test]
    fn rejects_downgrade_without_flag() {
        let temp = project(COMPLETE);
        let mut ui = MockUI::new();

        let result = run(&temp, args("0.0.9"), &mut ui);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("--downgrade"));
    }

    #[test]
    fn downgrade_with_flag_skips_confirmation() {
        let temp = project(COMPLETE);
        let mut ui = MockUI::new();
        let args = BumpVersionArgs {
            downgrade: true,
            ..args("0.0.1")
        };

        let result = run(&temp, args, &mut ui);

        assert!(result.success);
        assert!(ui.prompts_shown().is_empty());
        assert_eq!(project_version(&temp), Version::new(0, 0, 1));
    }

    #[test]
    fn dependency_pins_keep_their_versions() {
        let temp = project(&[
            ("README.md", b"# demo\n"),
            ("LICENSE", b"MIT\n"),
            (
                "setup.py",
                b"version='0.1.0'\ninstall_requires=['click==10.1.0', 'rich>=0.1.0.post1']\n",
            ),
        ]);
        let mut ui = MockUI::new();

        let result = run(&temp, args("0.1.1"), &mut ui);

        assert!(result.success);
        let setup = std::fs::read_to_string(temp.path().join("setup.py")).unwrap();
        assert_eq!(
            setup,
            "version='0.1.1'\ninstall_requires=['click==10.1.0', 'rich>=0.1.0.post1']\n"
        );
    }

    #[test]
    fn unusual_jump_declined() {
        let temp = project(COMPLETE);
        let mut ui = MockUI::new();

        let result = run(&temp, args("3.0.0"), &mut ui);

        assert!(result.success);
        assert_eq!(ui.prompts_shown(), [CONFIRM_BUMP_KEY]);
        assert!(ui.has_message("cancelled"));
        assert_eq!(project_version(&temp), Version::new(0, 1, 0));
    }

    #[test]
    fn unusual_jump_confirmed() {
        let temp = project(COMPLETE);
        let mut ui = MockUI::new();
        ui.set_prompt_response(CONFIRM_BUMP_KEY, "yes");

        let result = run(&temp, args("3.0.0"), &mut ui);

        assert!(result.success);
        assert_eq!(project_version(&temp), Version::new(3, 0, 0));
    }

    #[test]
    fn yes_flag_skips_confirmation() {
        let temp = project(COMPLETE);
        let mut ui = MockUI::new();
        let args = BumpVersionArgs {
            yes: true,
            ..args("0.5.0")
        };

        let result = run(&temp, args, &mut ui);

        assert!(result.success);
        assert!(ui.prompts_shown().is_empty());
        assert_eq!(project_version(&temp), Version::new(0, 5, 0));
    }

    #[test]
    fn lint_findings_are_warnings_only() {
        let temp = project(&[("setup.py", b"version='0.1.0'\n")]);
        let mut ui = MockUI::new();

        let result = run(&temp, args("0.1.1"), &mut ui);

        assert!(result.success);
        assert!(ui.has_warning("required-files"));
        assert!(ui.has_hint("forgeplate lint"));
        assert_eq!(project_version(&temp), Version::new(0, 1, 1));
    }

    #[test]
    fn verbose_lists_changed_files() {
        let temp = project(COMPLETE);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        run(&temp, args("0.1.1"), &mut ui);

        assert!(ui.has_message("setup.py: 1 replacement(s)"));
        assert!(ui.has_message("changelog"));
    }

    #[test]
    fn missing_project() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = run(&temp, args("1.0.0"), &mut ui);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("No forgeplate project found"));
    }
}

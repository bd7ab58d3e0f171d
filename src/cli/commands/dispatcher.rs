//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher. `project_root` is used when a command takes
    /// an optional project directory and none was given.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn project_dir(&self, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(dir) if dir.is_absolute() => dir.to_path_buf(),
            Some(dir) => self.project_root.join(dir),
            None => self.project_root.clone(),
        }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!("Dispatching {:?}", cli.command);

        match &cli.command {
            Commands::Info(args) => super::info::InfoCommand::new(args.clone()).execute(ui),
            Commands::List(args) => super::list::ListCommand::new(args.clone()).execute(ui),
            Commands::BumpVersion(args) => {
                // With --project-version the only positional names the project.
                let explicit = match (&args.project_dir, args.project_version) {
                    (None, true) => args.new_version.as_deref().map(Path::new),
                    _ => args.project_dir.as_deref(),
                };
                let dir = self.project_dir(explicit);
                super::bump_version::BumpVersionCommand::new(&dir, args.clone()).execute(ui)
            }
            Commands::Lint(args) => {
                let dir = self.project_dir(args.project_dir.as_deref());
                super::lint::LintCommand::new(&dir, args.clone()).execute(ui)
            }
            Commands::Config(args) => super::config::ConfigCommand::new(args.clone()).execute(ui),
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}

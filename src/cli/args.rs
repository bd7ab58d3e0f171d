//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Forgeplate - Project templates and version bumping.
#[derive(Debug, Parser)]
#[command(name = "forgeplate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show detailed information about a template or a group of templates
    Info(InfoArgs),

    /// List all available templates
    List(ListArgs),

    /// Bump the version of a generated project
    BumpVersion(BumpVersionArgs),

    /// Check a generated project against its template's conventions
    Lint(LintArgs),

    /// Store or show user settings
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `info` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InfoArgs {
    /// Template handle, e.g. `cli-python`, `gui` or `web-backend`
    pub handle: String,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `bump-version` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BumpVersionArgs {
    /// Version to bump to (MAJOR.MINOR.PATCH[-SNAPSHOT])
    #[arg(required_unless_present = "project_version")]
    pub new_version: Option<String>,

    /// Project directory (defaults to the current directory)
    pub project_dir: Option<PathBuf>,

    /// Allow the new version to be lower than the current one
    #[arg(short, long)]
    pub downgrade: bool,

    /// Skip the confirmation for unusual version jumps
    #[arg(short, long)]
    pub yes: bool,

    /// Print the current project version and exit
    #[arg(long)]
    pub project_version: bool,
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LintArgs {
    /// Project directory (defaults to the current directory)
    pub project_dir: Option<PathBuf>,

    /// Output format: human, json
    #[arg(long, default_value = "human", value_parser = ["human", "json"])]
    pub format: String,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl Default for LintArgs {
    fn default() -> Self {
        Self {
            project_dir: None,
            format: "human".to_string(),
            strict: false,
        }
    }
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Settings section: `general` to edit, `show` to print
    pub section: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

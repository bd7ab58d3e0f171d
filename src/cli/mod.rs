//! Command-line interface for forgeplate.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    BumpVersionArgs, Cli, Commands, CompletionsArgs, ConfigArgs, InfoArgs, LintArgs, ListArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};

//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`forgeplate info`, `forgeplate bump-version`)
//! - Shared initialization logic
//! - Consistent global flag handling

pub mod bump_version;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod info;
pub mod lint;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use crate::config::UserConfig;
use crate::error::Result;
use crate::registry::Registry;

/// Load the template registry the user has configured.
pub(crate) fn load_registry() -> Result<Registry> {
    let config = UserConfig::load()?;
    Registry::load(&config)
}

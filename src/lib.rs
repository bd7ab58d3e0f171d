//! Forgeplate - Project templates, linting and version bumping.
//!
//! Forgeplate keeps a registry of project templates keyed by domain,
//! optional subdomain and language, and looks after the projects generated
//! from them: it checks them against their template's conventions and bumps
//! their semantic version across every file that carries it.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - User settings
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Generated project linting
//! - [`project`] - Generated project metadata and version rewriting
//! - [`registry`] - Template registry and handle resolution
//! - [`ui`] - Interactive prompts, tables and terminal output
//! - [`version`] - Semantic version parsing and bump validation
//!
//! # Example
//!
//! ```
//! use forgeplate::registry::{flatten, Registry};
//! use forgeplate::version::{assess_bump, parse_version};
//!
//! let registry = Registry::builtin().unwrap();
//! let python = flatten(registry.resolve("cli-python").unwrap());
//! assert_eq!(python[0].handle, "cli-python");
//!
//! let current = parse_version("1.3.2").unwrap();
//! let bump = assess_bump(&current, "1.4.0", false).unwrap();
//! assert!(bump.reasonable);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod project;
pub mod registry;
pub mod ui;
pub mod version;

pub use error::{ForgeError, Result};

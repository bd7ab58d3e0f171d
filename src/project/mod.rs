//! Generated projects.
//!
//! A directory is a forgeplate project when it holds a `.forgeplate.yml`
//! ([`ProjectConfig`]). [`VersionBumper`] rewrites the project's version
//! string once a bump has been validated by [`crate::version`].

pub mod bumper;
pub mod config;

pub use bumper::{
    version_positions, BumpReport, FileChange, VersionBumper, CHANGELOG_FILE, NO_BUMP_MARKER,
};
pub use config::{BumpSettings, ProjectConfig, PROJECT_FILE};

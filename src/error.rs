//! Error types for forgeplate operations.
//!
//! This module defines [`ForgeError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Registry and version validation failures get their own variants so the
//!   CLI layer can tell them apart (suggestions, exit codes)
//! - Use `anyhow::Error` (via `ForgeError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for forgeplate operations.
#[derive(Debug, Error)]
pub enum ForgeError {
    /// A handle segment does not exist at the expected registry depth.
    #[error("Unknown handle '{handle}'")]
    HandleNotFound { handle: String },

    /// Text does not match `MAJOR.MINOR.PATCH[-SNAPSHOT]`.
    #[error("Invalid version '{version}': expected MAJOR.MINOR.PATCH or MAJOR.MINOR.PATCH-SNAPSHOT")]
    InvalidVersionFormat { version: String },

    /// The requested version equals the current one.
    #[error("The new version {version} cannot be equal to the current version")]
    NoOpVersion { version: String },

    /// A bump would lower the version without `--downgrade`.
    #[error("Cannot bump from {current} to {new}: the new version must be greater (use --downgrade to lower it)")]
    DowngradeNotAllowed { current: String, new: String },

    /// A downgrade would raise (or keep) the version.
    #[error("Cannot downgrade from {current} to {new}: the new version must be lower")]
    UpgradeNotAllowed { current: String, new: String },

    /// The directory is not a generated project.
    #[error("No forgeplate project found at {path}")]
    ProjectNotFound { path: PathBuf },

    /// Failed to parse a YAML document.
    #[error("Failed to parse {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for forgeplate operations.
pub type Result<T> = std::result::Result<T, ForgeError>;

//! User settings persistence.
//!
//! Settings live in `<config dir>/forgeplate/config.yml`. Setting
//! [`CONFIG_ENV_VAR`] points forgeplate at another file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ForgeError, Result};

/// Environment variable overriding the settings file location.
pub const CONFIG_ENV_VAR: &str = "FORGEPLATE_CONFIG";

/// Settings sections accepted by `forgeplate config`.
pub const CONFIG_SECTIONS: &[&str] = &["general", "show"];

/// Saved user settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Personal details used when generating projects.
    #[serde(default)]
    pub general: GeneralSettings,

    /// Custom template registry document, replacing the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_path: Option<PathBuf>,
}

/// The `general` settings section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSettings {
    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub github_username: String,
}

impl GeneralSettings {
    /// Whether every field has been filled in.
    pub fn is_complete(&self) -> bool {
        !self.full_name.is_empty() && !self.email.is_empty() && !self.github_username.is_empty()
    }
}

impl UserConfig {
    /// Location of the settings file.
    ///
    /// Fails when neither [`CONFIG_ENV_VAR`] is set nor a platform config
    /// directory can be determined.
    pub fn file_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        dirs::config_dir()
            .map(|dir| dir.join("forgeplate").join("config.yml"))
            .ok_or_else(|| ForgeError::ConfigValidationError {
                message: format!(
                    "cannot locate a config directory; set {} to a settings file",
                    CONFIG_ENV_VAR
                ),
            })
    }

    /// Load settings from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::file_path()?)
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|e| ForgeError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Save settings to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::file_path()?)
    }

    /// Save settings to `path` using an atomic write.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = serde_yaml::to_string(self).map_err(|e| {
            ForgeError::ConfigValidationError {
                message: format!("Failed to serialize settings: {}", e),
            }
        })?;

        let temp_path = path.with_extension("yml.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

//! Project metadata persistence.
//!
//! Every generated project carries a [`PROJECT_FILE`] at its root recording
//! the template it came from and the files that hold its version string.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{ForgeError, Result};
use crate::version::Version;

/// File name of the project metadata document.
pub const PROJECT_FILE: &str = ".forgeplate.yml";

/// Metadata of a generated project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name as entered at generation time.
    pub project_name: String,

    /// Handle of the template the project was generated from.
    pub template_handle: String,

    /// Template version used for generation.
    pub template_version: Version,

    /// Current project version.
    pub version: Version,

    /// Version bump settings.
    #[serde(default)]
    pub bump: BumpSettings,
}

/// Files touched by `bump-version`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BumpSettings {
    /// Paths relative to the project root, in declared order.
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

impl ProjectConfig {
    /// Path of the metadata file for a project directory.
    pub fn file_path(project_dir: &Path) -> PathBuf {
        project_dir.join(PROJECT_FILE)
    }

    /// Load project metadata.
    ///
    /// Fails with [`ForgeError::ProjectNotFound`] when the directory holds no
    /// metadata file.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = Self::file_path(project_dir);
        if !path.is_file() {
            return Err(ForgeError::ProjectNotFound {
                path: project_dir.to_path_buf(),
            });
        }

        let content = fs::read_to_string(&path)?;
        Self::parse(&path, &content)
    }

    /// Parse a metadata document. `path` names it in errors.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| ForgeError::ConfigParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        for file in &config.bump.files {
            let escapes = file
                .components()
                .any(|c| matches!(c, Component::ParentDir));
            if file.is_absolute() || escapes {
                return Err(ForgeError::ConfigValidationError {
                    message: format!(
                        "bump file '{}' must stay inside the project root",
                        file.display()
                    ),
                });
            }
        }

        Ok(config)
    }

    /// Save project metadata using an atomic write.
    pub fn save(&self, project_dir: &Path) -> Result<()> {
        write_atomic(&Self::file_path(project_dir), &self.to_yaml()?)
    }

    /// Serialize the metadata document.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ForgeError::ConfigValidationError {
            message: format!("Failed to serialize project metadata: {}", e),
        })
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    path.with_file_name(temp_name)
}

/// Write `content` to a sibling temp file, then rename it over `path`.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = temp_path(path);
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Stage every write as a sibling temp file, then rename them all into place.
///
/// No target changes until every temp file has been written. A failed
/// stage removes the temp files written so far.
pub(crate) fn write_all_atomic(writes: &[(PathBuf, String)]) -> Result<()> {
    let mut staged: Vec<(PathBuf, &Path)> = Vec::with_capacity(writes.len());

    for (path, content) in writes {
        let temp_path = temp_path(path);
        if let Err(e) = fs::write(&temp_path, content) {
            for (temp, _) in &staged {
                let _ = fs::remove_file(temp);
            }
            return Err(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            )
            .into());
        }
        staged.push((temp_path, path.as_path()));
    }

    for (temp, path) in staged {
        fs::rename(&temp, path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const METADATA: &str = r#"
project_name: my-tool
template_handle: cli-python
template_version: 1.3.2
version: 0.1.0
bump:
  files:
    - setup.py
    - my_tool/__init__.py
"#;

    #[test]
    fn parses_metadata() {
        let config = ProjectConfig::parse(Path::new(PROJECT_FILE), METADATA).unwrap();
        assert_eq!(config.project_name, "my-tool");
        assert_eq!(config.template_handle, "cli-python");
        assert_eq!(config.template_version, Version::new(1, 3, 2));
        assert_eq!(config.version, Version::new(0, 1, 0));
        assert_eq!(
            config.bump.files,
            vec![
                PathBuf::from("setup.py"),
                PathBuf::from("my_tool/__init__.py")
            ]
        );
    }

    #[test]
    fn bump_section_is_optional() {
        let yaml = "project_name: x\ntemplate_handle: lib-cpp\ntemplate_version: 0.4.0\nversion: 1.0.0-SNAPSHOT\n";
        let config = ProjectConfig::parse(Path::new(PROJECT_FILE), yaml).unwrap();
        assert!(config.bump.files.is_empty());
        assert!(config.version.snapshot);
    }

    #[test]
    fn invalid_version_is_a_parse_error() {
        let yaml = METADATA.replace("version: 0.1.0", "version: 0.1");
        let result = ProjectConfig::parse(Path::new(PROJECT_FILE), &yaml);
        assert!(matches!(result, Err(ForgeError::ConfigParseError { .. })));
    }

    #[test]
    fn absolute_bump_file_is_rejected() {
        let yaml = METADATA.replace("- setup.py", "- /etc/passwd");
        let result = ProjectConfig::parse(Path::new(PROJECT_FILE), &yaml);
        assert!(matches!(
            result,
            Err(ForgeError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn bump_file_outside_project_is_rejected() {
        for escape in ["../../other/setup.py", "docs/../../setup.py"] {
            let yaml = METADATA.replace("- setup.py", &format!("- {}", escape));
            let result = ProjectConfig::parse(Path::new(PROJECT_FILE), &yaml);
            assert!(
                matches!(result, Err(ForgeError::ConfigValidationError { .. })),
                "{} should be rejected",
                escape
            );
        }
    }

    #[test]
    fn staged_write_failure_leaves_targets_untouched() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("setup.py");
        let second = temp.path().join("CHANGELOG.md");
        fs::write(&first, "old").unwrap();
        fs::create_dir(temp.path().join("CHANGELOG.md.tmp")).unwrap();

        let result = write_all_atomic(&[
            (first.clone(), "new".to_string()),
            (second.clone(), "new".to_string()),
        ]);

        assert!(matches!(result, Err(ForgeError::Io(_))));
        assert_eq!(fs::read_to_string(&first).unwrap(), "old");
        assert!(!second.exists());
        assert!(!temp.path().join("setup.py.tmp").exists());
    }

    #[test]
    fn load_missing_project_fails() {
        let temp = TempDir::new().unwrap();
        let result = ProjectConfig::load(temp.path());
        assert!(matches!(result, Err(ForgeError::ProjectNotFound { .. })));
    }

    #[test]
    fn save_and_load() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_FILE), METADATA).unwrap();

        let mut config = ProjectConfig::load(temp.path()).unwrap();
        config.version = Version::new(0, 2, 0);
        config.save(temp.path()).unwrap();

        let loaded = ProjectConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.version, Version::new(0, 2, 0));
        assert_eq!(loaded.bump, config.bump);
        assert!(!temp.path().join(".forgeplate.yml.tmp").exists());
    }
}

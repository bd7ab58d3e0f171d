//! Everything a lint rule may inspect.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::Result;
use crate::project::ProjectConfig;
use crate::registry::Registry;

/// Directories never scanned for text files.
pub const SKIPPED_DIRS: &[&str] = &[".git", "target", "node_modules", ".venv"];

/// A UTF-8 file of the project.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub content: String,
}

/// A project loaded for linting.
pub struct LintContext {
    root: PathBuf,
    config: ProjectConfig,
    registry: Registry,
    files: Vec<ProjectFile>,
}

impl LintContext {
    /// Load the project at `root` and scan its text files.
    pub fn load(root: &Path, registry: Registry) -> Result<Self> {
        let config = ProjectConfig::load(root)?;
        Self::new(root, config, registry)
    }

    /// Scan the text files of a project whose metadata is already loaded.
    pub fn new(root: &Path, config: ProjectConfig, registry: Registry) -> Result<Self> {
        let files = collect_text_files(root)?;
        tracing::debug!("Scanned {} text file(s) in {}", files.len(), root.display());
        Ok(Self {
            root: root.to_path_buf(),
            config,
            registry,
            files,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Text files in path order.
    pub fn files(&self) -> &[ProjectFile] {
        &self.files
    }

    /// Whether `relative` exists as a regular file in the project.
    pub fn has_file(&self, relative: impl AsRef<Path>) -> bool {
        self.root.join(relative).is_file()
    }
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

/// Every regular UTF-8 file under `root`, skipping [`SKIPPED_DIRS`].
fn collect_text_files(root: &Path) -> Result<Vec<ProjectFile>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_skipped(e));

    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let bytes = fs::read(entry.path())?;
        let Ok(content) = String::from_utf8(bytes) else {
            tracing::debug!("Skipping binary file {}", entry.path().display());
            continue;
        };

        let path = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_path_buf();
        files.push(ProjectFile { path, content });
    }

    Ok(files)
}

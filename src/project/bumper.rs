//! Rewriting a project's version string.

use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};

use super::config::{write_all_atomic, ProjectConfig, PROJECT_FILE};
use crate::error::Result;
use crate::version::Version;

/// Lines carrying this marker keep their version string.
pub const NO_BUMP_MARKER: &str = "<<FORGEPLATE_NO_BUMP>>";

/// Changelog updated with a section for each bump, when present.
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

/// One file rewritten by a bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Path relative to the project root.
    pub path: PathBuf,
    /// Number of version strings replaced.
    pub replacements: usize,
}

/// Summary of an applied bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpReport {
    pub previous: Version,
    pub new: Version,
    pub files: Vec<FileChange>,
    pub changelog_updated: bool,
}

impl BumpReport {
    /// Total replacements across every file.
    pub fn total_replacements(&self) -> usize {
        self.files.iter().map(|f| f.replacements).sum()
    }
}

/// Applies a validated version bump to a project on disk.
pub struct VersionBumper {
    project_dir: PathBuf,
    config: ProjectConfig,
}

impl VersionBumper {
    pub fn new(project_dir: &Path, config: ProjectConfig) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            config,
        }
    }

    /// Bump to `new`, dating the changelog section today.
    pub fn bump(&mut self, new: Version) -> Result<BumpReport> {
        self.bump_on(new, Local::now().date_naive())
    }

    /// Bump to `new`, dating the changelog section `date`.
    ///
    /// Every new file body, the changelog section and the metadata are
    /// computed and staged before any of them replaces its target, so a
    /// failure leaves the project at its previous version.
    pub fn bump_on(&mut self, new: Version, date: NaiveDate) -> Result<BumpReport> {
        let previous = self.config.version;
        let from = previous.to_string();
        let to = new.to_string();

        let mut writes = Vec::with_capacity(self.config.bump.files.len() + 2);
        let mut files = Vec::with_capacity(self.config.bump.files.len());
        for relative in &self.config.bump.files {
            let path = self.project_dir.join(relative);
            let content = fs::read_to_string(&path).map_err(|e| {
                std::io::Error::new(e.kind(), format!("{}: {}", relative.display(), e))
            })?;

            let (rewritten, replacements) = replace_version(&content, &from, &to);
            tracing::debug!(
                "Replacing {} occurrence(s) of {} in {}",
                replacements,
                from,
                relative.display()
            );
            if replacements > 0 {
                writes.push((path, rewritten));
            }
            files.push(FileChange {
                path: relative.clone(),
                replacements,
            });
        }

        let changelog_path = self.project_dir.join(CHANGELOG_FILE);
        let changelog_updated = changelog_path.is_file();
        if changelog_updated {
            let content = fs::read_to_string(&changelog_path)?;
            let updated = add_changelog_section(&content, &new, date);
            writes.push((changelog_path, updated));
        }

        let mut config = self.config.clone();
        config.version = new;
        writes.push((ProjectConfig::file_path(&self.project_dir), config.to_yaml()?));

        write_all_atomic(&writes)?;
        self.config = config;
        tracing::debug!("Updated {} to {}", PROJECT_FILE, to);

        Ok(BumpReport {
            previous,
            new,
            files,
            changelog_updated,
        })
    }
}

/// Byte offsets of every standalone occurrence of `version` in `line`.
///
/// An occurrence counts only when it is not preceded by a digit or `.` and
/// not followed by a digit, `.` or `-`, so `0.1.0` matches neither
/// `10.1.0` nor `0.1.0.post1`.
pub fn version_positions<'a>(
    line: &'a str,
    version: &'a str,
) -> impl Iterator<Item = usize> + 'a {
    line.match_indices(version)
        .map(|(start, _)| start)
        .filter(move |&start| {
            let before = line[..start].chars().next_back();
            let after = line[start + version.len()..].chars().next();
            !matches!(before, Some(c) if c.is_ascii_digit() || c == '.')
                && !matches!(after, Some(c) if c.is_ascii_digit() || c == '.' || c == '-')
        })
}

/// Replace every standalone `from` with `to`, skipping lines that carry
/// [`NO_BUMP_MARKER`]. Returns the new text and the replacement count.
pub fn replace_version(content: &str, from: &str, to: &str) -> (String, usize) {
    let mut output = String::with_capacity(content.len());
    let mut count = 0;

    for line in content.split_inclusive('\n') {
        if line.contains(NO_BUMP_MARKER) {
            output.push_str(line);
            continue;
        }
        let mut copied = 0;
        for start in version_positions(line, from) {
            output.push_str(&line[copied..start]);
            output.push_str(to);
            copied = start + from.len();
            count += 1;
        }
        output.push_str(&line[copied..]);
    }

    (output, count)
}

/// Insert a `## <version> (<date>)` section before the first `## ` heading,
/// or append it when the changelog has none.
pub fn add_changelog_section(content: &str, version: &Version, date: NaiveDate) -> String {
    let section = format!("## {} ({})\n\n", version, date.format("%Y-%m-%d"));

    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if line.starts_with("## ") {
            let mut updated = String::with_capacity(content.len() + section.len());
            updated.push_str(&content[..offset]);
            updated.push_str(&section);
            updated.push_str(&content[offset..]);
            return updated;
        }
        offset += line.len();
    }

    let mut updated = content.to_string();
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    if !updated.is_empty() && !updated.ends_with("\n\n") {
        updated.push('\n');
    }
    updated.push_str(&section);
    updated
}

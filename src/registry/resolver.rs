//! Handle resolution over the template registry.
//!
//! A handle names a node by its path of at most three keys:
//! `domain[-subdomain][-language]`. Resolution walks one level per segment,
//! comparing keys case-insensitively; whether the second segment means a
//! subdomain or a language is decided by the registry's shape alone.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::UserConfig;
use crate::error::{ForgeError, Result};
use crate::registry::builtin::{registry_document, REGISTRY_FILE};
use crate::registry::template::{Node, TemplateRecord};

/// Maximum number of segments a handle may have.
pub const MAX_HANDLE_SEGMENTS: usize = 3;

/// Where a registry was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    /// The document embedded in the binary.
    Builtin,
    /// A user-supplied document.
    File(PathBuf),
}

/// A loaded template registry.
#[derive(Debug, Clone)]
pub struct Registry {
    root: Node,
    source: RegistrySource,
}

impl Registry {
    /// Load the registry embedded in the binary.
    pub fn builtin() -> Result<Self> {
        let content = registry_document()?;
        let mut registry = Self::from_yaml_str(format!("templates/{}", REGISTRY_FILE), content)?;
        registry.source = RegistrySource::Builtin;
        Ok(registry)
    }

    /// Load a registry document from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(path, &content)
    }

    /// Parse a registry document. `label` names the document in errors.
    pub fn from_yaml_str(label: impl Into<PathBuf>, content: &str) -> Result<Self> {
        let path = label.into();
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ForgeError::ConfigParseError {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let root = Node::from_yaml("", value).map_err(|message| ForgeError::ConfigParseError {
            path: path.clone(),
            message,
        })?;

        if root.is_leaf() {
            return Err(ForgeError::ConfigParseError {
                path,
                message: "the registry root must map domains to templates".to_string(),
            });
        }

        Ok(Self {
            root,
            source: RegistrySource::File(path),
        })
    }

    /// Load the registry the user configured, falling back to the built-in one.
    pub fn load(config: &UserConfig) -> Result<Self> {
        match &config.registry_path {
            Some(path) => {
                tracing::debug!("Loading template registry from {}", path.display());
                Self::from_path(path)
            }
            None => Self::builtin(),
        }
    }

    /// The root node (always a branch).
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Where this registry came from.
    pub fn source(&self) -> &RegistrySource {
        &self.source
    }

    /// Resolve a handle against this registry.
    pub fn resolve(&self, handle: &str) -> Result<&Node> {
        resolve(handle, &self.root)
    }

    /// Top-level domains in declared order.
    pub fn domains(&self) -> Vec<(&str, &Node)> {
        match &self.root {
            Node::Branch(children) => children
                .iter()
                .map(|(key, node)| (key.as_str(), node))
                .collect(),
            Node::Leaf(_) => Vec::new(),
        }
    }
}

/// Resolve a handle to the node at its path.
///
/// Fails with [`ForgeError::HandleNotFound`] when any segment is missing at
/// its depth, when a segment is empty, or when the handle has more than
/// [`MAX_HANDLE_SEGMENTS`] segments.
pub fn resolve<'a>(handle: &str, registry: &'a Node) -> Result<&'a Node> {
    let not_found = || ForgeError::HandleNotFound {
        handle: handle.to_string(),
    };

    let segments: Vec<&str> = handle.split('-').collect();
    if segments.len() > MAX_HANDLE_SEGMENTS || segments.iter().any(|s| s.is_empty()) {
        return Err(not_found());
    }

    let mut node = registry;
    for segment in segments {
        node = node.child(segment).ok_or_else(not_found)?;
    }

    tracing::debug!("Resolved handle '{}'", handle);
    Ok(node)
}

/// Flatten a node into its template records, depth-first in declared order.
pub fn flatten(node: &Node) -> Vec<&TemplateRecord> {
    let mut records = Vec::new();
    collect_records(node, &mut records);
    records
}

fn collect_records<'a>(node: &'a Node, records: &mut Vec<&'a TemplateRecord>) {
    match node {
        Node::Leaf(record) => records.push(record),
        Node::Branch(children) => {
            for (_, child) in children {
                collect_records(child, records);
            }
        }
    }
}

/// Handles of every template in the registry.
pub fn all_leaf_handles(registry: &Node) -> BTreeSet<String> {
    flatten(registry)
        .into_iter()
        .map(|record| record.handle.clone())
        .collect()
}

/// Every resolvable path in the registry (domains, subdomains and leaves),
/// lower-cased and joined with `-`.
pub fn known_handles(registry: &Node) -> BTreeSet<String> {
    let mut handles = BTreeSet::new();
    collect_paths(registry, "", 0, &mut handles);
    handles
}

fn collect_paths(node: &Node, prefix: &str, depth: usize, handles: &mut BTreeSet<String>) {
    if depth == MAX_HANDLE_SEGMENTS {
        return;
    }
    if let Node::Branch(children) = node {
        for (key, child) in children {
            let path = if prefix.is_empty() {
                key.to_lowercase()
            } else {
                format!("{}-{}", prefix, key.to_lowercase())
            };
            collect_paths(child, &path, depth + 1, handles);
            handles.insert(path);
        }
    }
}

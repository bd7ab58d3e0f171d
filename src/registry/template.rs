//! Template registry data model.
//!
//! The registry document is a nested YAML mapping (domain, then optional
//! subdomain, then language) whose leaves are template records. It is
//! converted once into a [`Node`] tree so lookups never have to probe the
//! shape of a mapping at runtime.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Key whose presence (as a string) marks a mapping as a template record.
const LEAF_MARKER: &str = "handle";

/// Metadata of a single template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Display name
    pub name: String,

    /// Canonical handle (e.g. `cli-python`)
    pub handle: String,

    /// One-line description shown by `list`
    #[serde(default)]
    pub short_description: String,

    /// Full description shown by `info`
    #[serde(default)]
    pub long_description: String,

    /// Libraries the generated project ships with, in declared order
    #[serde(default)]
    pub available_libraries: Vec<String>,

    /// Semantic version of the template itself
    pub version: String,
}

/// A node of the template registry tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A single template.
    Leaf(TemplateRecord),
    /// Nested templates, in the order the registry document declares them.
    Branch(Vec<(String, Node)>),
}

impl Node {
    /// Look up a direct child by key, ignoring case.
    ///
    /// Leaves have no children.
    pub fn child(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Leaf(_) => None,
            Node::Branch(children) => {
                let key = key.to_lowercase();
                children
                    .iter()
                    .find(|(name, _)| name.to_lowercase() == key)
                    .map(|(_, node)| node)
            }
        }
    }

    /// Whether this node is a single template.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// The template record, if this node is a leaf.
    pub fn as_record(&self) -> Option<&TemplateRecord> {
        match self {
            Node::Leaf(record) => Some(record),
            Node::Branch(_) => None,
        }
    }

    /// Convert a parsed YAML value into a registry node.
    ///
    /// `key_path` is the hyphen-joined path of the value, used in error
    /// messages (empty for the document root).
    pub fn from_yaml(key_path: &str, value: Value) -> Result<Self, String> {
        let Value::Mapping(mapping) = value else {
            return Err(format!(
                "'{}' must be a mapping of templates",
                display_path(key_path)
            ));
        };

        if mapping.get(LEAF_MARKER).is_some_and(Value::is_string) {
            let record: TemplateRecord = serde_yaml::from_value(Value::Mapping(mapping))
                .map_err(|e| format!("template '{}': {}", display_path(key_path), e))?;
            return Ok(Node::Leaf(record));
        }

        let mut children: Vec<(String, Node)> = Vec::with_capacity(mapping.len());
        for (key, child) in mapping {
            let Value::String(key) = key else {
                return Err(format!(
                    "'{}' contains a non-string key",
                    display_path(key_path)
                ));
            };

            if children
                .iter()
                .any(|(existing, _)| existing.to_lowercase() == key.to_lowercase())
            {
                return Err(format!(
                    "'{}' declares '{}' more than once (keys are case-insensitive)",
                    display_path(key_path),
                    key
                ));
            }

            let path = if key_path.is_empty() {
                key.clone()
            } else {
                format!("{}-{}", key_path, key)
            };
            let node = Node::from_yaml(&path, child)?;
            children.push((key, node));
        }

        Ok(Node::Branch(children))
    }
}

fn display_path(key_path: &str) -> &str {
    if key_path.is_empty() {
        "<root>"
    } else {
        key_path
    }
}

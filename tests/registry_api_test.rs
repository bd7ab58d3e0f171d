//! Integration tests for the registry public API.

use forgeplate::registry::{
    all_leaf_handles, flatten, known_handles, most_similar, resolve, wrap_text, Node, Registry,
    RegistrySource, DESCRIPTION_WIDTH,
};
use forgeplate::ForgeError;
use std::fs;
use tempfile::TempDir;

const REGISTRY: &str = r#"
web:
  website:
    python:
      name: Website Python
      handle: web-website-python
      short_description: Flask website
      long_description: A Flask based website with SQLAlchemy, Bootstrap and a Docker deployment setup ready for production use.
      available_libraries: [flask, sqlalchemy]
      version: 0.3.0
  backend:
    go:
      name: Backend Go
      handle: web-backend-go
      version: 0.1.0
pub:
  thesis:
    latex:
      name: Thesis LaTeX
      handle: pub-thesis-latex
      version: 1.0.0
"#;

fn registry() -> Registry {
    Registry::from_yaml_str("registry.yml", REGISTRY).unwrap()
}

#[test]
fn builtin_registry_loads() {
    let registry = Registry::builtin().unwrap();
    assert_eq!(registry.source(), &RegistrySource::Builtin);
    assert!(!registry.domains().is_empty());
    assert!(all_leaf_handles(registry.root()).contains("cli-python"));
}

#[test]
fn resolve_full_handle_to_leaf() {
    let registry = registry();
    let node = registry.resolve("web-website-python").unwrap();

    let record = node.as_record().unwrap();
    assert_eq!(record.name, "Website Python");
    assert_eq!(record.available_libraries, ["flask", "sqlalchemy"]);
}

#[test]
fn resolve_partial_handle_to_subtree() {
    let registry = registry();
    let node = registry.resolve("WEB").unwrap();

    assert!(matches!(node, Node::Branch(_)));
    let handles: Vec<&str> = flatten(node).iter().map(|r| r.handle.as_str()).collect();
    assert_eq!(handles, ["web-website-python", "web-backend-go"]);
}

#[test]
fn resolve_misses() {
    let registry = registry();
    for handle in ["web-mobile", "web-website-python-extra", "", "web--go", "cli"] {
        assert!(
            matches!(
                resolve(handle, registry.root()),
                Err(ForgeError::HandleNotFound { .. })
            ),
            "{} should not resolve",
            handle
        );
    }
}

#[test]
fn flatten_root_visits_every_leaf_in_order() {
    let registry = registry();
    let handles: Vec<&str> = flatten(registry.root())
        .iter()
        .map(|r| r.handle.as_str())
        .collect();
    assert_eq!(
        handles,
        ["web-website-python", "web-backend-go", "pub-thesis-latex"]
    );
}

#[test]
fn suggestions_use_known_handles() {
    let registry = registry();
    let candidates: Vec<String> = known_handles(registry.root()).into_iter().collect();

    assert!(candidates.contains(&"web-backend".to_string()));
    let similar = most_similar("web-bakend", candidates.iter().map(String::as_str));
    assert_eq!(similar, ["web-backend"]);
}

#[test]
fn long_descriptions_wrap() {
    let registry = registry();
    let record = registry
        .resolve("web-website-python")
        .unwrap()
        .as_record()
        .unwrap();

    let wrapped = wrap_text(&record.long_description, DESCRIPTION_WIDTH);
    assert!(wrapped.lines().count() > 1);
    assert!(wrapped
        .lines()
        .all(|line| line.chars().count() <= DESCRIPTION_WIDTH));
    assert_eq!(wrapped.replace('\n', " "), record.long_description);
}

#[test]
fn registry_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("templates.yml");
    fs::write(&path, REGISTRY).unwrap();

    let registry = Registry::from_path(&path).unwrap();
    assert_eq!(registry.source(), &RegistrySource::File(path));
    assert_eq!(flatten(registry.root()).len(), 3);
}

#[test]
fn malformed_registry_is_rejected() {
    let err = Registry::from_yaml_str("bad.yml", "cli:\n  python: [1, 2]\n").unwrap_err();
    assert!(matches!(err, ForgeError::ConfigParseError { .. }));
}

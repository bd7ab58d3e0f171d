//! Built-in template registry embedded at compile time.

use crate::error::{ForgeError, Result};
use include_dir::{include_dir, Dir};

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// File name of the registry document inside the templates directory.
pub const REGISTRY_FILE: &str = "available_templates.yml";

/// Raw text of the embedded registry document.
pub fn registry_document() -> Result<&'static str> {
    let file = TEMPLATES_DIR
        .get_file(REGISTRY_FILE)
        .ok_or_else(|| ForgeError::ConfigValidationError {
            message: format!("built-in registry templates/{} is missing", REGISTRY_FILE),
        })?;

    file.contents_utf8()
        .ok_or_else(|| ForgeError::ConfigParseError {
            path: format!("templates/{}", REGISTRY_FILE).into(),
            message: "Invalid UTF-8".to_string(),
        })
}

//! Template registry for forgeplate.
//!
//! The registry maps domains (`cli`, `lib`, `gui`, `web`, `pub`) to optional
//! subdomains and languages, ending in template records. This module loads
//! the registry, resolves handles against it, and flattens subtrees for
//! display.
//!
//! # Handles
//!
//! A handle is `domain[-subdomain][-language]`, matched case-insensitively:
//! `cli`, `cli-python`, `web-website-python`.
//!
//! # Example
//!
//! ```
//! use forgeplate::registry::{flatten, Registry};
//!
//! let registry = Registry::builtin().unwrap();
//! let node = registry.resolve("cli").unwrap();
//! for template in flatten(node) {
//!     println!("{} ({})", template.name, template.handle);
//! }
//! ```

pub mod builtin;
pub mod display;
pub mod resolver;
pub mod suggest;
pub mod template;

// Re-exports
pub use display::{wrap_text, DESCRIPTION_WIDTH};
pub use resolver::{
    all_leaf_handles, flatten, known_handles, resolve, Registry, RegistrySource,
    MAX_HANDLE_SEGMENTS,
};
pub use suggest::{edit_distance, most_similar};
pub use template::{Node, TemplateRecord};

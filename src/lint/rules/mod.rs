//! Built-in lint rules.

pub mod known_template;
pub mod required_files;
pub mod template_outdated;
pub mod todo_marker;
pub mod unrendered_placeholder;
pub mod version_consistency;

pub use known_template::KnownTemplateRule;
pub use required_files::RequiredFilesRule;
pub use template_outdated::TemplateOutdatedRule;
pub use todo_marker::TodoMarkerRule;
pub use unrendered_placeholder::{UnrenderedPlaceholderRule, PLACEHOLDER_PATTERNS};
pub use version_consistency::VersionConsistencyRule;

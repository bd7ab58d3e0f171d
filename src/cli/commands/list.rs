//! List command implementation.
//!
//! The `forgeplate list` command lists every template grouped by domain.
//! Long descriptions are left to `forgeplate info`.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::registry::{flatten, Registry, TemplateRecord};
use crate::ui::theme::ForgeTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// A template as shown by `list --json`.
#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    domain: &'a str,
    name: &'a str,
    handle: &'a str,
    short_description: &'a str,
    available_libraries: &'a [String],
    version: &'a str,
}

impl<'a> ListEntry<'a> {
    fn new(domain: &'a str, record: &'a TemplateRecord) -> Self {
        Self {
            domain,
            name: &record.name,
            handle: &record.handle,
            short_description: &record.short_description,
            available_libraries: &record.available_libraries,
            version: &record.version,
        }
    }
}

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
    registry: Option<Registry>,
}

impl ListCommand {
    /// Create a new list command using the configured registry.
    pub fn new(args: ListArgs) -> Self {
        Self {
            args,
            registry: None,
        }
    }

    /// Create a list command that reads from `registry`.
    pub fn with_registry(args: ListArgs, registry: Registry) -> Self {
        Self {
            args,
            registry: Some(registry),
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn show_json(&self, registry: &Registry, ui: &mut dyn UserInterface) -> Result<()> {
        let entries: Vec<ListEntry<'_>> = registry
            .domains()
            .into_iter()
            .flat_map(|(domain, node)| {
                flatten(node)
                    .into_iter()
                    .map(move |record| ListEntry::new(domain, record))
            })
            .collect();

        let json = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
        ui.message(&json);
        Ok(())
    }

    fn show_human(&self, registry: &Registry, ui: &mut dyn UserInterface) {
        let theme = ForgeTheme::new();

        ui.show_header("Available templates");
        for (domain, node) in registry.domains() {
            ui.message(&format!("  {}", theme.key.apply_to(format!("{}:", domain))));
            for record in flatten(node) {
                ui.message(&format!(
                    "    {} {} {}",
                    theme.highlight.apply_to(&record.handle),
                    theme.dim.apply_to(format!("v{}", record.version)),
                    record.name,
                ));
                if !record.short_description.is_empty() {
                    ui.message(&format!(
                        "      {}",
                        theme.dim.apply_to(&record.short_description)
                    ));
                }
            }
        }
        ui.hint("Run 'forgeplate info <handle>' for long descriptions.");
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = match &self.registry {
            Some(registry) => registry.clone(),
            None => super::load_registry()?,
        };

        if self.args.json {
            self.show_json(&registry, ui)?;
        } else {
            self.show_human(&registry, ui);
        }

        Ok(CommandResult::success())
    }
}

//! Info command implementation.
//!
//! The `forgeplate info` command shows every template below a handle in a
//! table, with the long description wrapped to fit.

use std::collections::BTreeSet;

use crate::cli::args::InfoArgs;
use crate::error::{ForgeError, Result};
use crate::registry::{
    all_leaf_handles, flatten, known_handles, most_similar, wrap_text, Registry,
    DESCRIPTION_WIDTH,
};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The info command implementation.
pub struct InfoCommand {
    args: InfoArgs,
    registry: Option<Registry>,
}

impl InfoCommand {
    /// Create a new info command using the configured registry.
    pub fn new(args: InfoArgs) -> Self {
        Self {
            args,
            registry: None,
        }
    }

    /// Create an info command that reads from `registry`.
    pub fn with_registry(args: InfoArgs, registry: Registry) -> Self {
        Self {
            args,
            registry: Some(registry),
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InfoArgs {
        &self.args
    }

    fn render(&self, registry: &Registry, handle: &str) -> Result<Table> {
        let node = registry.resolve(handle)?;

        let mut table = Table::new(vec![
            "Name",
            "Handle",
            "Description",
            "Available Libraries",
            "Version",
        ])
        .with_row_separators();

        for record in flatten(node) {
            let description = wrap_text(&record.long_description, DESCRIPTION_WIDTH);
            let libraries = record.available_libraries.join("\n");
            table.add_row(vec![
                record.name.as_str(),
                record.handle.as_str(),
                description.as_str(),
                libraries.as_str(),
                record.version.as_str(),
            ]);
        }

        Ok(table)
    }
}

/// Report an unknown handle with the closest known handles.
fn report_unknown_handle(ui: &mut dyn UserInterface, registry: &Registry, handle: &str) {
    let candidates: BTreeSet<String> = known_handles(registry.root())
        .into_iter()
        .chain(all_leaf_handles(registry.root()))
        .collect();
    let similar = most_similar(handle, candidates.iter().map(String::as_str));

    ui.error(&format!(
        "Unknown handle '{}'. See 'forgeplate list' for all valid handles.",
        handle
    ));
    match similar.as_slice() {
        [] => ui.hint("Run 'forgeplate list' to display all template handles."),
        [only] => ui.hint(&format!("Did you mean '{}'?", only)),
        many => {
            ui.hint("Most similar handles are:");
            for candidate in many {
                ui.message(&format!("  {}", candidate));
            }
        }
    }
}

impl Command for InfoCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = match &self.registry {
            Some(registry) => registry.clone(),
            None => super::load_registry()?,
        };
        let handle = self.args.handle.trim().to_lowercase();

        match self.render(&registry, &handle) {
            Ok(table) => {
                ui.show_header(&format!("Info on {} templates", handle));
                ui.message(&table.render());
                Ok(CommandResult::success())
            }
            Err(ForgeError::HandleNotFound { .. }) => {
                report_unknown_handle(ui, &registry, &handle);
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn info(handle: &str) -> (CommandResult, MockUI) {
        let registry = Registry::builtin().unwrap();
        let cmd = InfoCommand::with_registry(
            InfoArgs {
                handle: handle.to_string(),
            },
            registry,
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn shows_a_single_template() {
        let (result, ui) = info("cli-python");

        assert!(result.success);
        assert!(ui.has_message("Command Line Interface Python"));
        assert!(ui.has_message("1.3.2"));
        assert!(!ui.has_message("cli-java"));
        assert_eq!(ui.headers(), ["Info on cli-python templates"]);
    }

    #[test]
    fn shows_every_template_of_a_domain() {
        let (result, ui) = info("cli");

        assert!(result.success);
        assert!(ui.has_message("cli-python"));
        assert!(ui.has_message("cli-java"));
        assert!(ui.has_message("cli-kotlin"));
    }

    #[test]
    fn handle_is_case_insensitive() {
        let (result, ui) = info("CLI-Python");
        assert!(result.success);
        assert!(ui.has_message("cli-python"));
    }

    #[test]
    fn wraps_long_descriptions() {
        let (_, ui) = info("cli-python");
        let output = ui.output();

        assert!(output.contains("A Python command line application built on Click."));
        assert!(!output.contains("Click. Ships"));
    }

    #[test]
    fn unknown_handle_suggests_the_closest_one() {
        let (result, ui) = info("cli-pyton");

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Unknown handle 'cli-pyton'"));
        assert!(ui.has_hint("Did you mean 'cli-python'?"));
    }

    #[test]
    fn unknown_handle_without_similar_points_to_list() {
        let (result, ui) = info("zzzzzzzzzzzz");

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_hint("forgeplate list"));
    }

    #[test]
    fn too_many_segments_is_unknown() {
        let (result, ui) = info("cli-python-extra-more");
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Unknown handle"));
    }
}

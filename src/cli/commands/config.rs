//! Config command implementation.
//!
//! The `forgeplate config` command edits or shows the saved user settings.

use std::path::PathBuf;

use crate::cli::args::ConfigArgs;
use crate::config::{UserConfig, CONFIG_SECTIONS};
use crate::error::Result;
use crate::registry::most_similar;
use crate::ui::theme::ForgeTheme;
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    args: ConfigArgs,
    config_path: Option<PathBuf>,
}

impl ConfigCommand {
    /// Create a new config command for the default settings file.
    pub fn new(args: ConfigArgs) -> Self {
        Self {
            args,
            config_path: None,
        }
    }

    /// Create a config command working on the settings file at `path`.
    pub fn with_config_path(args: ConfigArgs, path: PathBuf) -> Self {
        Self {
            args,
            config_path: Some(path),
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => UserConfig::file_path(),
        }
    }

    fn configure_general(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = self.config_path()?;
        let mut config = UserConfig::load_from(&path)?;

        let general = &mut config.general;
        let fields = [
            ("full_name", "Full name", &mut general.full_name),
            ("email", "Personal or work email", &mut general.email),
            ("github_username", "GitHub username", &mut general.github_username),
        ];

        for (key, question, field) in fields {
            let default = Some(field.as_str()).filter(|c| !c.is_empty());
            let answer = ui.prompt(&Prompt::input(key, question, default))?;
            *field = answer.as_string();
        }

        config.save_to(&path)?;
        tracing::debug!("Saved settings to {}", path.display());
        ui.success(&format!("Saved settings to {}", path.display()));
        Ok(CommandResult::success())
    }

    fn show(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = self.config_path()?;
        let config = UserConfig::load_from(&path)?;
        let theme = ForgeTheme::new();

        let or_unset = |value: &str| {
            if value.is_empty() {
                "(not set)".to_string()
            } else {
                value.to_string()
            }
        };

        ui.show_header("Settings");
        ui.message(&theme.format_key_value("  file", &path.display().to_string()));
        ui.message(&theme.format_key_value("  full_name", &or_unset(&config.general.full_name)));
        ui.message(&theme.format_key_value("  email", &or_unset(&config.general.email)));
        ui.message(&theme.format_key_value(
            "  github_username",
            &or_unset(&config.general.github_username),
        ));
        let registry = config
            .registry_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string());
        ui.message(&theme.format_key_value("  registry_path", &registry));

        if !config.general.is_complete() {
            ui.hint("Run 'forgeplate config general' to fill in missing settings.");
        }

        Ok(CommandResult::success())
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let section = self.args.section.trim().to_lowercase();

        match section.as_str() {
            "general" => self.configure_general(ui),
            "show" => self.show(ui),
            _ => {
                ui.error(&format!("Unknown settings section '{}'", self.args.section));
                match most_similar(&section, CONFIG_SECTIONS.iter().copied()).as_slice() {
                    [only] => ui.hint(&format!("Did you mean '{}'?", only)),
                    _ => ui.hint(&format!(
                        "Available sections are: {}",
                        CONFIG_SECTIONS.join(", ")
                    )),
                }
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn command(temp: &TempDir, section: &str) -> ConfigCommand {
        ConfigCommand::with_config_path(
            ConfigArgs {
                section: section.to_string(),
            },
            temp.path().join("forgeplate").join("config.yml"),
        )
    }

    #[test]
    fn general_saves_answers() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp, "general");
        let mut ui = MockUI::new();
        ui.set_prompt_response("full_name", "Ada Lovelace");
        ui.set_prompt_response("email", "ada@example.com");
        ui.set_prompt_response("github_username", "ada");

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.prompts_shown(), ["full_name", "email", "github_username"]);
        let saved = UserConfig::load_from(&cmd.config_path().unwrap()).unwrap();
        assert_eq!(saved.general.full_name, "Ada Lovelace");
        assert_eq!(saved.general.email, "ada@example.com");
        assert!(saved.general.is_complete());
    }

    #[test]
    fn general_keeps_current_values_as_defaults() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp, "general");
        let path = cmd.config_path().unwrap();
        let mut existing = UserConfig::default();
        existing.general.full_name = "Grace Hopper".to_string();
        existing.general.email = "grace@example.com".to_string();
        existing.general.github_username = "grace".to_string();
        existing.save_to(&path).unwrap();

        let mut ui = MockUI::new();
        ui.set_prompt_response("email", "hopper@example.com");
        cmd.execute(&mut ui).unwrap();

        let saved = UserConfig::load_from(&path).unwrap();
        assert_eq!(saved.general.full_name, "Grace Hopper");
        assert_eq!(saved.general.email, "hopper@example.com");
    }

    #[test]
    fn show_prints_settings() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp, "show");
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("full_name"));
        assert!(ui.has_message("(not set)"));
        assert!(ui.has_message("(built-in)"));
        assert!(ui.has_hint("config general"));
    }

    #[test]
    fn unknown_section_suggests_closest() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = command(&temp, "genral").execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Unknown settings section 'genral'"));
        assert!(ui.has_hint("Did you mean 'general'?"));
    }

    #[test]
    fn unknown_section_without_match_lists_sections() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = command(&temp, "credentials").execute(&mut ui).unwrap();

        assert!(!result.success);
        assert!(ui.has_hint("general, show"));
    }
}

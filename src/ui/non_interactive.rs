//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{ForgeError, Result};

use super::{parse_yes, OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// Prefix of environment variables answering prompts.
///
/// `FORGEPLATE_PROMPT_CONFIRM_BUMP=yes` answers the prompt keyed
/// `confirm_bump`.
pub const PROMPT_ENV_PREFIX: &str = "FORGEPLATE_PROMPT_";

/// Whether a well-known CI environment variable is set.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS", "JENKINS_URL"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `FORGEPLATE_PROMPT_<KEY>` variables, falling
/// back to the prompt's default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_decorations() {
            println!("  {}", msg);
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        let answer = self
            .env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref())
            .cloned();

        match (prompt.prompt_type, answer) {
            (PromptType::Confirm, Some(value)) => Ok(PromptResult::Bool(parse_yes(&value))),
            (PromptType::Confirm, None) => Ok(PromptResult::Bool(false)),
            (PromptType::Input, Some(value)) => Ok(PromptResult::String(value)),
            (PromptType::Input, None) => Err(ForgeError::ConfigValidationError {
                message: format!(
                    "Cannot prompt for '{}' in non-interactive mode (set {})",
                    prompt.key, env_key
                ),
            }),
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_decorations() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

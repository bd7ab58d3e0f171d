//! Scripted UI for command tests.
//!
//! `MockUI` records everything a command shows as an ordered transcript and
//! answers prompts from scripted responses, falling back to each prompt's
//! default.
//!
//! # Example
//!
//! ```
//! use forgeplate::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("confirm_bump", "yes");
//!
//! let answer = ui.prompt(&Prompt::confirm("confirm_bump", "Bump anyway?", false)).unwrap();
//! ui.success("Bumped");
//!
//! assert!(answer.as_bool());
//! assert_eq!(ui.transcript(), "prompt: confirm_bump\nsuccess: Bumped");
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::error::{ForgeError, Result};

use super::{parse_yes, OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// Where a recorded line was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Header,
    Message,
    Success,
    Warning,
    Error,
    Hint,
    /// A prompt was shown; the line is its key.
    Prompt,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Header => "header",
            Self::Message => "message",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Hint => "hint",
            Self::Prompt => "prompt",
        };
        f.write_str(label)
    }
}

/// UI double that records output in order.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    log: Vec<(Channel, String)>,
    responses: HashMap<String, String>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Script the answer to the prompt with `key`.
    ///
    /// Confirm prompts treat `y`, `yes` and `true` as yes.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.responses.insert(key.to_string(), response.to_string());
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Lines sent to `channel`, in order.
    pub fn lines(&self, channel: Channel) -> Vec<&str> {
        self.log
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, line)| line.as_str())
            .collect()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.lines(Channel::Message)
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.lines(Channel::Warning)
    }

    pub fn headers(&self) -> Vec<&str> {
        self.lines(Channel::Header)
    }

    /// Keys of every prompt shown, in order.
    pub fn prompts_shown(&self) -> Vec<&str> {
        self.lines(Channel::Prompt)
    }

    /// Whether any line on `channel` contains `needle`.
    pub fn has(&self, channel: Channel, needle: &str) -> bool {
        self.log
            .iter()
            .any(|(c, line)| *c == channel && line.contains(needle))
    }

    pub fn has_message(&self, msg: &str) -> bool {
        self.has(Channel::Message, msg)
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.has(Channel::Success, msg)
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        self.has(Channel::Warning, msg)
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.has(Channel::Error, msg)
    }

    pub fn has_hint(&self, msg: &str) -> bool {
        self.has(Channel::Hint, msg)
    }

    /// Plain messages joined by newlines, as they would reach stdout.
    pub fn output(&self) -> String {
        self.messages().join("\n")
    }

    /// Every recorded line as `channel: text`, in the order shown.
    pub fn transcript(&self) -> String {
        self.log
            .iter()
            .map(|(channel, line)| format!("{}: {}", channel, line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn record(&mut self, channel: Channel, line: &str) {
        self.log.push((channel, line.to_string()));
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.record(Channel::Message, msg);
    }

    fn success(&mut self, msg: &str) {
        self.record(Channel::Success, msg);
    }

    fn warning(&mut self, msg: &str) {
        self.record(Channel::Warning, msg);
    }

    fn error(&mut self, msg: &str) {
        self.record(Channel::Error, msg);
    }

    fn hint(&mut self, msg: &str) {
        self.record(Channel::Hint, msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.record(Channel::Prompt, &prompt.key);

        let response = self
            .responses
            .get(&prompt.key)
            .or(prompt.default.as_ref());

        match (prompt.prompt_type, response) {
            (PromptType::Confirm, response) => Ok(PromptResult::Bool(
                response.is_some_and(|r| parse_yes(r)),
            )),
            (PromptType::Input, Some(response)) => Ok(PromptResult::String(response.clone())),
            (PromptType::Input, None) => Err(ForgeError::ConfigValidationError {
                message: format!("no scripted answer for prompt '{}'", prompt.key),
            }),
        }
    }

    fn show_header(&mut self, title: &str) {
        self.record(Channel::Header, title);
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_keeps_the_order_lines_were_shown() {
        let mut ui = MockUI::new();
        ui.show_header("Bump demo");
        ui.warning("[todo-marker] TODO left in setup.py");
        ui.prompt(&Prompt::confirm("confirm_bump", "Bump anyway?", false))
            .unwrap();
        ui.message("Version bump cancelled.");

        assert_eq!(
            ui.transcript(),
            "header: Bump demo\n\
             warning: [todo-marker] TODO left in setup.py\n\
             prompt: confirm_bump\n\
             message: Version bump cancelled."
        );
    }

    #[test]
    fn channels_are_queried_separately() {
        let mut ui = MockUI::new();
        ui.error("Unknown handle 'cli-pyton'");
        ui.hint("Did you mean 'cli-python'?");

        assert!(ui.has_error("cli-pyton"));
        assert!(!ui.has_hint("cli-pyton'?"));
        assert!(ui.has(Channel::Hint, "cli-python"));
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn unanswered_confirm_uses_prompt_default() {
        let mut ui = MockUI::new();
        let declined = Prompt::confirm("confirm_bump", "?", false);
        let accepted = Prompt::confirm("overwrite", "?", true);

        assert_eq!(ui.prompt(&declined).unwrap(), PromptResult::Bool(false));
        assert_eq!(ui.prompt(&accepted).unwrap(), PromptResult::Bool(true));
        assert_eq!(ui.prompts_shown(), ["confirm_bump", "overwrite"]);
    }

    #[test]
    fn scripted_answer_replaces_current_value() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("email", "new@example.com");
        let prompt = Prompt::input("email", "Email", Some("old@example.com"));
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "new@example.com");
    }

    #[test]
    fn input_without_answer_or_default_fails() {
        let mut ui = MockUI::new();
        assert!(ui.prompt(&Prompt::input("full_name", "?", None)).is_err());
    }

    #[test]
    fn mode_and_interactivity_are_configurable() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        assert!(!ui.is_interactive());
        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }
}

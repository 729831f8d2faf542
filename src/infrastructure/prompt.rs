use crate::core::interfaces::ConfirmationProvider;
use crate::utils::Result;
use dialoguer::Confirm;

/// Interactive y/n confirmation on the operator's terminal.
///
/// Accepts y/yes/n/no case-insensitively and re-prompts on anything else;
/// a bare Enter declines.
pub struct TerminalConfirmation;

impl TerminalConfirmation {
    pub fn new() -> Self {
        Self
    }
}

impl ConfirmationProvider for TerminalConfirmation {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(answer)
    }
}

impl Default for TerminalConfirmation {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-interactive provider backing the `--yes` flag.
pub struct AssumeYes;

impl ConfirmationProvider for AssumeYes {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}

//! Confirmation prompt adapters.
//!
//! [`StdinConfirm`] is the interactive production implementation;
//! [`PresetConfirm`] answers from a constant for tests and `--yes` runs.

use std::io::{self, Write};

use teststub_core::{
    application::{ApplicationError, ports::Confirm},
    error::StubResult,
};

/// Interactive yes/no prompt reading from stdin.
///
/// Empty input (including EOF on a non-interactive stdin) resolves to the
/// default answer, so piped invocations behave like pressing Enter.
#[derive(Debug, Clone, Copy)]
pub struct StdinConfirm;

impl StdinConfirm {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinConfirm {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirm for StdinConfirm {
    fn confirm(&self, message: &str, default: bool) -> StubResult<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        print!("{message} {hint} ");
        io::stdout().flush().map_err(|e| ApplicationError::Prompt {
            reason: format!("failed to flush stdout: {e}"),
        })?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| ApplicationError::Prompt {
                reason: format!("failed to read confirmation input: {e}"),
            })?;

        let input = input.trim().to_ascii_lowercase();
        if input.is_empty() {
            return Ok(default);
        }
        Ok(input == "y" || input == "yes")
    }
}

/// Non-interactive prompt that always returns a preset answer.
#[derive(Debug, Clone, Copy)]
pub struct PresetConfirm {
    answer: bool,
}

impl PresetConfirm {
    pub fn new(answer: bool) -> Self {
        Self { answer }
    }

    /// Always-affirmative prompt, for `--yes`.
    pub fn always_yes() -> Self {
        Self::new(true)
    }
}

impl Confirm for PresetConfirm {
    fn confirm(&self, _message: &str, _default: bool) -> StubResult<bool> {
        Ok(self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_ignores_default() {
        let no = PresetConfirm::new(false);
        assert!(!no.confirm("create?", true).unwrap());

        let yes = PresetConfirm::always_yes();
        assert!(yes.confirm("create?", false).unwrap());
    }
}

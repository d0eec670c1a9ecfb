use crate::utils::{Result, SweepError};
use dialoguer::Input;
use std::io::{BufRead, IsTerminal, Write};
use tracing::debug;

pub const CONFIRM_PROMPT: &str = "Do you want to delete these branches? (y/n)";

/// Asks the operator for one line of input.
pub trait Prompt {
    /// `Ok(None)` means there was no answer because input ended.
    fn ask(&self, prompt: &str) -> Result<Option<String>>;
}

/// Only an exact `y`, in either case, confirms.
pub fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}

/// Interactive `dialoguer` prompt on a TTY, plain line read from stdin otherwise.
///
/// Ctrl-C at the interactive prompt raises SIGINT and ends the process. The original
/// branch is already checked out again by then.
pub struct TerminalPrompt;

impl TerminalPrompt {
    fn ask_interactive(prompt: &str) -> Result<Option<String>> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map(Some)
            .map_err(|e| SweepError::prompt(format!("Failed to read input: {}", e)))
    }

    fn ask_piped(
        prompt: &str,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<Option<String>> {
        write!(output, "{}: ", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("Prompt input closed");
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&self, prompt: &str) -> Result<Option<String>> {
        if std::io::stdin().is_terminal() {
            Self::ask_interactive(prompt)
        } else {
            Self::ask_piped(
                prompt,
                &mut std::io::stdin().lock(),
                &mut std::io::stdout().lock(),
            )
        }
    }
}

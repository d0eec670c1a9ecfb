pub mod prompt;
pub mod reporter;

pub use prompt::{is_affirmative, Prompt, TerminalPrompt, CONFIRM_PROMPT};
pub use reporter::{ConsoleReporter, Reporter, SweepEvent};

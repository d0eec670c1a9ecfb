mod mock_git;
mod mock_ui;

pub use mock_git::MockGit;
pub use mock_ui::{RecordingReporter, ScriptedPrompt};

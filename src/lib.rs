pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::core::git::{GitOperations, GitRepository, WorkingTreeStatus};
pub use crate::core::sweep::{
    remove_stale_branches, BranchInspector, StaleBranchRemover, SweepOptions, SweepOutcome,
};
pub use ui::{Prompt, Reporter, SweepEvent};
pub use utils::{Result, SweepError};

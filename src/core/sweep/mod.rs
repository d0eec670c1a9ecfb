pub mod guard;
pub mod inspector;
pub mod staleness;

pub use guard::CheckoutGuard;
pub use inspector::{BranchInspector, CheckoutInspector};
pub use staleness::stale_branches;

use crate::core::git::{GitOperations, GitRepository, GitValidator};
use crate::ui::{
    is_affirmative, ConsoleReporter, Prompt, Reporter, SweepEvent, TerminalPrompt, CONFIRM_PROMPT,
};
use crate::utils::{Result, SweepError};
use std::path::Path;
use tracing::{debug, info};

pub const DEFAULT_REMOTE: &str = "origin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOptions {
    /// Remote whose `<remote>/` prefix is stripped before comparing names.
    pub remote: String,
    pub dry_run: bool,
    pub assume_yes: bool,
    pub force: bool,
    pub skip_repo_check: bool,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE.to_string(),
            dry_run: false,
            assume_yes: false,
            force: false,
            skip_repo_check: false,
        }
    }
}

impl SweepOptions {
    pub fn validate(&self) -> Result<()> {
        GitValidator::validate_ref_name(&self.remote).map_err(|e| match e {
            SweepError::InvalidBranchName { name, reason } => {
                SweepError::invalid_args(format!("Invalid remote name '{}': {}", name, reason))
            }
            other => other,
        })?;

        if self.dry_run && self.assume_yes {
            return Err(SweepError::invalid_args(
                "--dry-run and --yes cannot be used together",
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepOutcome {
    NoStaleBranches,
    DryRun { stale: Vec<String> },
    Aborted { stale: Vec<String> },
    Deleted { deleted: Vec<String> },
}

/// Finds and deletes stale local branches for one invocation.
pub struct StaleBranchRemover<'a> {
    git: &'a dyn GitOperations,
    inspector: &'a dyn BranchInspector,
    prompt: &'a dyn Prompt,
    reporter: &'a dyn Reporter,
    options: SweepOptions,
}

impl<'a> StaleBranchRemover<'a> {
    pub fn new(
        git: &'a dyn GitOperations,
        inspector: &'a dyn BranchInspector,
        prompt: &'a dyn Prompt,
        reporter: &'a dyn Reporter,
        options: SweepOptions,
    ) -> Self {
        Self {
            git,
            inspector,
            prompt,
            reporter,
            options,
        }
    }

    /// Run the sweep. The branch checked out at the start is checked out again before
    /// anything is deleted, and on every failure path of the scan.
    pub fn run(&self) -> Result<SweepOutcome> {
        let local_branches = self.git.list_local_branches()?;
        let remote_branches = self.git.list_remote_branches()?;
        let status = self.git.status()?;

        self.reporter
            .emit(&SweepEvent::CurrentBranch(status.current.clone()));

        let guard = CheckoutGuard::new(self.git, status.current.clone());
        let filtered = self.filter_branches(&local_branches, guard.original())?;
        // git refuses to delete the checked-out branch, so switch back before deleting.
        guard.restore()?;

        let stale = stale_branches(&filtered, &remote_branches, &self.options.remote);
        info!(
            "{} local, {} clean candidates, {} stale",
            local_branches.len(),
            filtered.len(),
            stale.len()
        );

        self.confirm_and_delete(stale)
    }

    /// Clean, non-current local branches in scan order.
    fn filter_branches(&self, local_branches: &[String], current: &str) -> Result<Vec<String>> {
        let mut filtered = Vec::new();

        for branch in local_branches {
            if branch == current {
                self.reporter.emit(&SweepEvent::SkipCurrent(branch.clone()));
                continue;
            }

            if !self.inspector.inspect_cleanliness(branch)? {
                self.reporter.emit(&SweepEvent::SkipDirty(branch.clone()));
                continue;
            }

            filtered.push(branch.clone());
        }

        Ok(filtered)
    }

    fn confirm_and_delete(&self, stale: Vec<String>) -> Result<SweepOutcome> {
        if stale.is_empty() {
            self.reporter.emit(&SweepEvent::NoStaleBranches);
            return Ok(SweepOutcome::NoStaleBranches);
        }

        self.reporter.emit(&SweepEvent::StaleBranches(stale.clone()));

        if self.options.dry_run {
            self.reporter.emit(&SweepEvent::DryRun);
            return Ok(SweepOutcome::DryRun { stale });
        }

        if !self.options.assume_yes && !self.confirm()? {
            self.reporter.emit(&SweepEvent::Aborted);
            return Ok(SweepOutcome::Aborted { stale });
        }

        self.delete_branches(stale)
    }

    fn confirm(&self) -> Result<bool> {
        match self.prompt.ask(CONFIRM_PROMPT)? {
            Some(answer) => {
                debug!("Operator answered {:?}", answer);
                Ok(is_affirmative(&answer))
            }
            None => Ok(false),
        }
    }

    /// Deletes every stale branch, continuing past failures. Any failure turns the
    /// whole run into a `PartialDeletion` error once the loop has finished.
    fn delete_branches(&self, stale: Vec<String>) -> Result<SweepOutcome> {
        let total = stale.len();
        let mut deleted = Vec::with_capacity(total);
        let mut failed = 0;

        for branch in stale {
            match self.git.delete_local_branch(&branch, self.options.force) {
                Ok(()) => {
                    info!("Deleted {}", branch);
                    self.reporter.emit(&SweepEvent::Deleted(branch.clone()));
                    deleted.push(branch);
                }
                Err(e) => {
                    failed += 1;
                    self.reporter.emit(&SweepEvent::DeleteFailed {
                        branch,
                        error: e.to_string(),
                    });
                }
            }
        }

        if failed > 0 {
            return Err(SweepError::partial_deletion(failed, total));
        }

        Ok(SweepOutcome::Deleted { deleted })
    }
}

/// Validate `directory` and sweep it with the real git client, terminal prompt and
/// console output.
pub fn remove_stale_branches(directory: &Path, options: SweepOptions) -> Result<SweepOutcome> {
    options.validate()?;
    GitValidator::validate_repository(directory, options.skip_repo_check)?;

    let repo = GitRepository::new(directory);
    let inspector = CheckoutInspector::new(&repo);
    let prompt = TerminalPrompt;
    let reporter = ConsoleReporter;

    StaleBranchRemover::new(&repo, &inspector, &prompt, &reporter, options).run()
}

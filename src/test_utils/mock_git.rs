use crate::core::git::{GitOperations, WorkingTreeStatus};
use crate::utils::{Result, SweepError};
use std::cell::RefCell;
use std::collections::HashSet;

/// In-memory git client. Tracks the checked-out branch and records every checkout and
/// delete call, including ones that were made to fail.
pub struct MockGit {
    local: Vec<String>,
    remote: Vec<String>,
    dirty: HashSet<String>,
    failing_checkouts: HashSet<String>,
    failing_deletes: HashSet<String>,
    current: RefCell<String>,
    checkout_calls: RefCell<Vec<String>>,
    delete_calls: RefCell<Vec<(String, bool)>>,
}

impl MockGit {
    pub fn new(local: &[&str], remote: &[&str], current: &str) -> Self {
        Self {
            local: to_strings(local),
            remote: to_strings(remote),
            dirty: HashSet::new(),
            failing_checkouts: HashSet::new(),
            failing_deletes: HashSet::new(),
            current: RefCell::new(current.to_string()),
            checkout_calls: RefCell::new(Vec::new()),
            delete_calls: RefCell::new(Vec::new()),
        }
    }

    /// Branches whose working tree reports uncommitted changes once checked out.
    pub fn with_dirty(mut self, branches: &[&str]) -> Self {
        self.dirty.extend(to_strings(branches));
        self
    }

    pub fn with_failing_checkout(mut self, branch: &str) -> Self {
        self.failing_checkouts.insert(branch.to_string());
        self
    }

    pub fn with_failing_delete(mut self, branch: &str) -> Self {
        self.failing_deletes.insert(branch.to_string());
        self
    }

    pub fn current_branch(&self) -> String {
        self.current.borrow().clone()
    }

    pub fn checkout_calls(&self) -> Vec<String> {
        self.checkout_calls.borrow().clone()
    }

    pub fn delete_calls(&self) -> Vec<String> {
        self.delete_calls
            .borrow()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn forced_deletes(&self) -> Vec<bool> {
        self.delete_calls
            .borrow()
            .iter()
            .map(|(_, force)| *force)
            .collect()
    }
}

impl GitOperations for MockGit {
    fn list_local_branches(&self) -> Result<Vec<String>> {
        Ok(self.local.clone())
    }

    fn list_remote_branches(&self) -> Result<Vec<String>> {
        Ok(self.remote.clone())
    }

    fn status(&self) -> Result<WorkingTreeStatus> {
        let current = self.current_branch();
        let clean = !self.dirty.contains(&current);
        Ok(WorkingTreeStatus { current, clean })
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.checkout_calls.borrow_mut().push(branch.to_string());

        if self.failing_checkouts.contains(branch) {
            return Err(SweepError::git_operation(format!(
                "pathspec '{}' did not match",
                branch
            )));
        }

        *self.current.borrow_mut() = branch.to_string();
        Ok(())
    }

    fn delete_local_branch(&self, branch: &str, force: bool) -> Result<()> {
        self.delete_calls
            .borrow_mut()
            .push((branch.to_string(), force));

        if self.failing_deletes.contains(branch) {
            return Err(SweepError::git_operation(format!(
                "branch '{}' is not fully merged",
                branch
            )));
        }

        if *self.current.borrow() == branch {
            return Err(SweepError::git_operation(
                "Cannot delete current branch".to_string(),
            ));
        }

        Ok(())
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

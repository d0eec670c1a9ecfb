use crate::utils::error::Result;

pub mod branch;
pub mod repository;
pub mod validation;

pub use branch::BranchManager;
pub use repository::GitRepository;
pub use validation::GitValidator;

/// Snapshot of the working tree: which branch is checked out and whether it has
/// uncommitted changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingTreeStatus {
    pub current: String,
    pub clean: bool,
}

impl WorkingTreeStatus {
    pub fn new(current: impl Into<String>, clean: bool) -> Self {
        Self {
            current: current.into(),
            clean,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.clean
    }
}

/// The version-control primitives the sweep is built on.
pub trait GitOperations {
    fn list_local_branches(&self) -> Result<Vec<String>>;
    fn list_remote_branches(&self) -> Result<Vec<String>>;
    fn status(&self) -> Result<WorkingTreeStatus>;
    fn checkout(&self, branch: &str) -> Result<()>;
    fn delete_local_branch(&self, branch: &str, force: bool) -> Result<()>;
}

impl GitOperations for GitRepository {
    fn list_local_branches(&self) -> Result<Vec<String>> {
        BranchManager::new(self).list_local_branches()
    }

    fn list_remote_branches(&self) -> Result<Vec<String>> {
        BranchManager::new(self).list_remote_branches()
    }

    fn status(&self) -> Result<WorkingTreeStatus> {
        let current = self.get_current_branch()?;
        let clean = self.is_clean_working_tree()?;
        Ok(WorkingTreeStatus { current, clean })
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.checkout_branch(branch)
    }

    fn delete_local_branch(&self, branch: &str, force: bool) -> Result<()> {
        BranchManager::new(self).delete_branch(branch, force)
    }
}

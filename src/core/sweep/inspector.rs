use crate::core::git::GitOperations;
use crate::utils::Result;

/// Answers whether a branch has uncommitted changes.
pub trait BranchInspector {
    fn inspect_cleanliness(&self, branch: &str) -> Result<bool>;
}

/// Checks out the branch and asks for the working-tree status.
///
/// Leaves the working tree on `branch`; callers restore the original checkout
/// with a [`CheckoutGuard`](super::guard::CheckoutGuard).
pub struct CheckoutInspector<'a> {
    git: &'a dyn GitOperations,
}

impl<'a> CheckoutInspector<'a> {
    pub fn new(git: &'a dyn GitOperations) -> Self {
        Self { git }
    }
}

impl BranchInspector for CheckoutInspector<'_> {
    fn inspect_cleanliness(&self, branch: &str) -> Result<bool> {
        self.git.checkout(branch)?;
        Ok(self.git.status()?.is_clean())
    }
}

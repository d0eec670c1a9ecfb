use crate::core::git::GitOperations;
use crate::utils::Result;
use tracing::{debug, warn};

/// Switches the working tree back to the branch that was checked out when the guard
/// was created. Restores on drop unless [`CheckoutGuard::restore`] already ran.
///
/// No checkout happens when HEAD is still on the original branch, which matters for
/// unborn branches: `git checkout main` fails before the first commit.
pub struct CheckoutGuard<'a> {
    git: &'a dyn GitOperations,
    original: String,
    armed: bool,
}

impl<'a> CheckoutGuard<'a> {
    pub fn new(git: &'a dyn GitOperations, original: impl Into<String>) -> Self {
        Self {
            git,
            original: original.into(),
            armed: true,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Restore now and surface any checkout error.
    pub fn restore(mut self) -> Result<()> {
        self.armed = false;
        if self.git.status()?.current == self.original {
            debug!("Still on {}, nothing to restore", self.original);
            return Ok(());
        }

        debug!("Restoring checkout of {}", self.original);
        self.git.checkout(&self.original)
    }

    fn on_original(&self) -> bool {
        matches!(self.git.status(), Ok(status) if status.current == self.original)
    }
}

impl Drop for CheckoutGuard<'_> {
    fn drop(&mut self) {
        if !self.armed || self.on_original() {
            return;
        }

        debug!("Restoring checkout of {} after failure", self.original);
        if let Err(e) = self.git.checkout(&self.original) {
            warn!("Failed to restore branch {}: {}", self.original, e);
            eprintln!(
                "Warning: could not switch back to branch '{}': {}",
                self.original, e
            );
        }
    }
}

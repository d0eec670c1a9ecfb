use crate::utils::error::{Result, SweepError};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// A working tree driven through the `git` binary.
#[derive(Debug, Clone)]
pub struct GitRepository {
    pub root: PathBuf,
}

impl GitRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Name of the checked-out branch, or the commit id when HEAD is detached.
    pub fn get_current_branch(&self) -> Result<String> {
        match execute_git_command(self, &["symbolic-ref", "--short", "-q", "HEAD"]) {
            Ok(branch) if !branch.is_empty() => Ok(branch),
            _ => execute_git_command(self, &["rev-parse", "HEAD"]),
        }
    }

    pub fn is_clean_working_tree(&self) -> Result<bool> {
        let status_output = execute_git_command(self, &["status", "--porcelain"])?;
        Ok(status_output.trim().is_empty())
    }

    pub fn checkout_branch(&self, branch: &str) -> Result<()> {
        execute_git_command_with_status(self, &["checkout", branch])
    }
}

pub fn execute_git_command(repo: &GitRepository, args: &[&str]) -> Result<String> {
    debug!("git {}", args.join(" "));

    let output = Command::new("git")
        .current_dir(&repo.root)
        .args(args)
        .output()
        .map_err(|e| SweepError::git_operation(format!("Failed to execute git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SweepError::git_operation(format!(
            "Git command failed ({}): {}",
            args.join(" "),
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.trim().to_string())
}

pub fn execute_git_command_with_status(repo: &GitRepository, args: &[&str]) -> Result<()> {
    execute_git_command(repo, args).map(|_| ())
}

use super::repository::{execute_git_command, execute_git_command_with_status, GitRepository};
use crate::utils::error::{Result, SweepError};

const REF_FORMAT: &str = "--format=%(refname:lstrip=2)%09%(symref)";

pub struct BranchManager<'a> {
    repo: &'a GitRepository,
}

impl<'a> BranchManager<'a> {
    pub fn new(repo: &'a GitRepository) -> Self {
        Self { repo }
    }

    pub fn list_local_branches(&self) -> Result<Vec<String>> {
        let output = execute_git_command(self.repo, &["for-each-ref", REF_FORMAT, "refs/heads"])?;
        Ok(parse_ref_lines(&output))
    }

    /// Remote-tracking branches with their remote prefix, e.g. `origin/main`.
    pub fn list_remote_branches(&self) -> Result<Vec<String>> {
        let output =
            execute_git_command(self.repo, &["for-each-ref", REF_FORMAT, "refs/remotes"])?;
        Ok(parse_ref_lines(&output))
    }

    pub fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
        let current_branch = self.repo.get_current_branch()?;
        if current_branch == name {
            return Err(SweepError::git_operation(
                "Cannot delete current branch".to_string(),
            ));
        }

        let flag = if force { "-D" } else { "-d" };
        execute_git_command_with_status(self.repo, &["branch", flag, name])
    }
}

/// Parse `for-each-ref` output of `<name>\t<symref>` lines, dropping symbolic refs
/// such as `origin/HEAD`.
fn parse_ref_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            let mut parts = line.splitn(2, '\t');
            let name = parts.next()?.trim();
            let symref = parts.next().unwrap_or("").trim();
            if name.is_empty() || !symref.is_empty() {
                return None;
            }
            Some(name.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::*;

    #[test]
    fn test_parse_ref_lines_skips_symbolic_refs() {
        let output = "origin/HEAD\trefs/remotes/origin/main\norigin/main\t\norigin/feature\t";
        assert_eq!(parse_ref_lines(output), vec!["origin/main", "origin/feature"]);
    }

    #[test]
    fn test_parse_ref_lines_empty_output() {
        assert!(parse_ref_lines("").is_empty());
    }

    #[test]
    fn test_list_local_branches() {
        let (_temp_dir, repo) = setup_test_repo();
        create_branch(&repo, "feature-1");
        create_branch(&repo, "stale-branch");

        let manager = BranchManager::new(&repo);
        let branches = manager.list_local_branches().unwrap();
        assert_eq!(branches, vec!["feature-1", "main", "stale-branch"]);
    }

    #[test]
    fn test_list_remote_branches() {
        let (_temp_dir, repo) = setup_test_repo();
        create_branch(&repo, "feature-1");
        add_remote_tracking_refs(&repo, "origin", &["main", "feature-1"]);

        let manager = BranchManager::new(&repo);
        let remotes = manager.list_remote_branches().unwrap();
        assert_eq!(remotes, vec!["origin/feature-1", "origin/main"]);
    }

    #[test]
    fn test_delete_branch() {
        let (_temp_dir, repo) = setup_test_repo();
        create_branch(&repo, "merged");

        let manager = BranchManager::new(&repo);
        manager.delete_branch("merged", false).unwrap();
        assert_eq!(manager.list_local_branches().unwrap(), vec!["main"]);
    }

    #[test]
    fn test_delete_unmerged_branch_requires_force() {
        let (temp_dir, repo) = setup_test_repo();
        create_branch(&repo, "wip");
        commit_on_branch(&repo, temp_dir.path(), "wip", "wip.txt");

        let manager = BranchManager::new(&repo);
        assert!(manager.delete_branch("wip", false).is_err());
        assert!(manager.delete_branch("wip", true).is_ok());
    }

    #[test]
    fn test_cannot_delete_current_branch() {
        let (_temp_dir, repo) = setup_test_repo();
        let manager = BranchManager::new(&repo);
        let result = manager.delete_branch("main", true);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Cannot delete current branch"));
    }
}

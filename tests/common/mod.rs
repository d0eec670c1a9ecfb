#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

pub fn git(repo_path: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_path)
        .args(args)
        .output()
        .expect("Failed to run git");
    assert!(output.status.success(), "git {} failed", args.join(" "));
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Repository on `main` with one commit.
pub fn setup_test_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo_path = temp_dir.path();

    git(repo_path, &["init", "--initial-branch=main"]);
    git(repo_path, &["config", "user.name", "Test User"]);
    git(repo_path, &["config", "user.email", "test@example.com"]);

    fs::write(repo_path.join("README.md"), "# Test Repository").expect("Failed to write README");
    git(repo_path, &["add", "README.md"]);
    git(repo_path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// local = [feature-1, main, stale-branch], remote = [origin/main, origin/feature-1].
pub fn setup_scenario_repo() -> TempDir {
    let temp_dir = setup_test_repo();
    let repo_path = temp_dir.path();

    git(repo_path, &["branch", "feature-1"]);
    git(repo_path, &["branch", "stale-branch"]);
    for branch in ["main", "feature-1"] {
        let reference = format!("refs/remotes/origin/{}", branch);
        git(repo_path, &["update-ref", &reference, "HEAD"]);
    }

    temp_dir
}

pub fn local_branches(repo_path: &Path) -> Vec<String> {
    git(repo_path, &["for-each-ref", "--format=%(refname:lstrip=2)", "refs/heads"])
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn current_branch(repo_path: &Path) -> String {
    git(repo_path, &["symbolic-ref", "--short", "HEAD"])
}

/// Freshly initialised repository: HEAD names `main` but there are no commits yet.
pub fn setup_unborn_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    git(temp_dir.path(), &["init", "--initial-branch=main"]);
    temp_dir
}

pub fn head_is_detached(repo_path: &Path) -> bool {
    !Command::new("git")
        .current_dir(repo_path)
        .args(["symbolic-ref", "-q", "HEAD"])
        .status()
        .expect("Failed to run git")
        .success()
}

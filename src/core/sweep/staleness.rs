use std::collections::HashSet;

/// Strip `<remote>/` from a remote-tracking branch name. Names from other remotes are
/// returned unchanged.
pub fn strip_remote_prefix<'a>(branch: &'a str, remote: &str) -> &'a str {
    branch
        .strip_prefix(remote)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(branch)
}

pub fn remote_name_set<'a>(remote_branches: &'a [String], remote: &str) -> HashSet<&'a str> {
    remote_branches
        .iter()
        .map(|branch| strip_remote_prefix(branch, remote))
        .collect()
}

/// Branches from `filtered` with no remote counterpart, in `filtered` order.
pub fn stale_branches(filtered: &[String], remote_branches: &[String], remote: &str) -> Vec<String> {
    let remote_names = remote_name_set(remote_branches, remote);

    filtered
        .iter()
        .filter(|branch| !remote_names.contains(branch.as_str()))
        .cloned()
        .collect()
}

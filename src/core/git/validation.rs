use crate::utils::error::{Result, SweepError};
use regex::Regex;
use std::path::Path;
use tracing::debug;

/// Git-related precondition checks
pub struct GitValidator;

impl GitValidator {
    /// Check that `directory` exists and holds a `.git` entry, unless `skip_check` is set.
    ///
    /// `.git` may be a directory (regular checkout) or a file (linked worktree).
    pub fn validate_repository(directory: &Path, skip_check: bool) -> Result<()> {
        if skip_check {
            debug!("Skipping repository check for {}", directory.display());
            return Ok(());
        }

        if !directory.exists() || !directory.join(".git").exists() {
            return Err(SweepError::not_a_repository(directory));
        }

        Ok(())
    }

    /// Validate a ref component (branch or remote name) according to Git's naming rules
    pub fn validate_ref_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(SweepError::invalid_branch_name(name, "name cannot be empty"));
        }

        if name.len() > 250 {
            return Err(SweepError::invalid_branch_name(name, "name too long"));
        }

        let invalid_patterns = [
            r"^-",                 // Starts with -
            r"/$",                 // Ends with /
            r"[ \t]",              // Contains whitespace
            r"[\x00-\x1f\x7f]",    // Contains control characters
            r"~|\^|:|\\|\*|\?|\[", // Contains special Git characters
            r"^@$",                // Exactly "@"
            r"/\.",                // Contains "/."
            r"\.\.",               // Contains ".."
            r"@\{",                // Contains "@{"
            r"\.lock$",            // Ends with .lock
        ];

        for pattern in invalid_patterns {
            let regex = Regex::new(pattern)?;
            if regex.is_match(name) {
                return Err(SweepError::invalid_branch_name(
                    name,
                    "contains invalid characters or patterns",
                ));
            }
        }

        if name.starts_with("refs/") {
            return Err(SweepError::invalid_branch_name(
                name,
                "cannot start with 'refs/'",
            ));
        }

        Ok(())
    }
}

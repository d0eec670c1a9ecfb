use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("The specified directory is not a Git repository: {path}")]
    NotARepository { path: String },

    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("Invalid branch name: {name} - {reason}")]
    InvalidBranchName { name: String, reason: String },

    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    #[error("Failed to delete {failed} of {total} stale branches")]
    PartialDeletion { failed: usize, total: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, SweepError>;

impl SweepError {
    pub fn not_a_repository(path: &Path) -> Self {
        Self::NotARepository {
            path: path.display().to_string(),
        }
    }

    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }

    pub fn invalid_branch_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBranchName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    pub fn partial_deletion(failed: usize, total: usize) -> Self {
        Self::PartialDeletion { failed, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation_helpers() {
        let git_err = SweepError::git_operation("checkout failed");
        assert!(matches!(git_err, SweepError::GitOperation { .. }));
        assert_eq!(git_err.to_string(), "Git operation failed: checkout failed");

        let args_err = SweepError::invalid_args("remote name cannot be empty");
        assert!(matches!(args_err, SweepError::InvalidArgs { .. }));
        assert_eq!(
            args_err.to_string(),
            "Invalid arguments: remote name cannot be empty"
        );

        let partial = SweepError::partial_deletion(1, 3);
        assert_eq!(partial.to_string(), "Failed to delete 1 of 3 stale branches");
    }

    #[test]
    fn test_not_a_repository_mentions_path() {
        let err = SweepError::not_a_repository(Path::new("/tmp/nowhere"));
        assert!(err.to_string().contains("/tmp/nowhere"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SweepError = io_err.into();
        assert!(matches!(err, SweepError::Io(_)));
    }
}

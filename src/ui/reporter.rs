use colored::Colorize;
use std::fmt;

/// Everything the sweep tells the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepEvent {
    CurrentBranch(String),
    SkipCurrent(String),
    SkipDirty(String),
    NoStaleBranches,
    StaleBranches(Vec<String>),
    DryRun,
    Deleted(String),
    DeleteFailed { branch: String, error: String },
    Aborted,
}

impl fmt::Display for SweepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentBranch(branch) => write!(f, "Current branch: {}", branch),
            Self::SkipCurrent(branch) => write!(f, "Skipping current branch: {}", branch),
            Self::SkipDirty(branch) => {
                write!(f, "Skipping branch with pending changes: {}", branch)
            }
            Self::NoStaleBranches => write!(f, "No stale branches found."),
            Self::StaleBranches(branches) => write!(
                f,
                "The following branches are stale and will be deleted:\n{}",
                branches.join("\n")
            ),
            Self::DryRun => write!(f, "Dry run: no branches were deleted."),
            Self::Deleted(branch) => write!(f, "Deleted branch: {}", branch),
            Self::DeleteFailed { branch, error } => {
                write!(f, "Failed to delete branch {}: {}", branch, error)
            }
            Self::Aborted => write!(f, "Operation aborted."),
        }
    }
}

pub trait Reporter {
    fn emit(&self, event: &SweepEvent);
}

/// Coloured stdout output. Colour is dropped automatically when `NO_COLOR` is set.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn emit(&self, event: &SweepEvent) {
        match event {
            SweepEvent::NoStaleBranches => println!("{}", event.to_string().yellow()),
            SweepEvent::StaleBranches(branches) => {
                println!(
                    "{}",
                    "The following branches are stale and will be deleted:".blue()
                );
                println!("{}", branches.join("\n").cyan());
            }
            SweepEvent::DryRun => println!("{}", event.to_string().yellow()),
            SweepEvent::Deleted(_) => println!("{}", event.to_string().green()),
            SweepEvent::DeleteFailed { .. } => eprintln!("{}", event.to_string().red()),
            SweepEvent::Aborted => println!("{}", event.to_string().red()),
            _ => println!("{}", event),
        }
    }
}

use crate::core::sweep::{SweepOptions, DEFAULT_REMOTE};
use crate::utils::Result;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "branch-sweep")]
#[command(about = "Delete local git branches that have no remote-tracking branch")]
#[command(
    version,
    long_about = "Lists local branches with no matching remote-tracking branch, asks for \
    confirmation and deletes them. Branches with uncommitted changes and the current \
    branch are never touched."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub sweep: SweepArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completion script
    Completion(CompletionArgs),
}

#[derive(Args, Debug, Default)]
pub struct SweepArgs {
    /// Repository to clean (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Remote whose branches protect local branches from deletion
    #[arg(long, short = 'r', default_value = DEFAULT_REMOTE)]
    pub remote: String,

    /// Only list stale branches
    #[arg(long, short = 'n', help = "List stale branches without deleting them")]
    pub dry_run: bool,

    /// Delete without asking for confirmation
    #[arg(long, short = 'y', help = "Delete without asking for confirmation")]
    pub yes: bool,

    /// Delete unmerged branches too (git branch -D)
    #[arg(long, short = 'f', help = "Delete unmerged branches too (git branch -D)")]
    pub force: bool,

    /// Do not require a .git entry in the directory
    #[arg(long, hide = true)]
    pub skip_repo_check: bool,
}

#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completion for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl SweepArgs {
    pub fn to_options(&self) -> SweepOptions {
        SweepOptions {
            remote: self.remote.clone(),
            dry_run: self.dry_run,
            assume_yes: self.yes,
            force: self.force,
            skip_repo_check: self.skip_repo_check,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.to_options().validate()
    }
}

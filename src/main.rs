use branch_sweep::cli::{execute_command, Cli};
use branch_sweep::utils::{logging, SweepError};
use clap::Parser;
use colored::Colorize;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = execute_command(cli) {
        match e {
            SweepError::NotARepository { .. } => eprintln!(
                "{}",
                "Error: The specified directory is not a Git repository.".red()
            ),
            e => eprintln!("branch-sweep: {}", e),
        }
        std::process::exit(1);
    }
}

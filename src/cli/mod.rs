pub mod commands;
pub mod parser;


pub use parser::{Cli, Commands};

use crate::utils::Result;

pub fn execute_command(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Completion(args)) => commands::completion::execute(args),
        None => {
            cli.sweep.validate()?;
            commands::sweep::execute(cli.sweep)
        }
    }
}

use crate::cli::parser::SweepArgs;
use crate::core::sweep::remove_stale_branches;
use crate::utils::Result;
use tracing::debug;

pub fn execute(args: SweepArgs) -> Result<()> {
    let directory = match &args.directory {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    let outcome = remove_stale_branches(&directory, args.to_options())?;
    debug!("Sweep finished: {:?}", outcome);

    Ok(())
}

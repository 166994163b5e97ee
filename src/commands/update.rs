//! Update command implementation

use crate::cli::UpdateArgs;
use crate::error::Result;

use super::helpers::{self, SiteOpts};

/// Run the update command
pub fn run(opts: &SiteOpts, args: UpdateArgs) -> Result<i32> {
    let manager = helpers::build_manager(opts)?;

    if args.packages.is_empty() {
        println!("Updating all root packages");
    } else {
        println!("Updating {} extension(s)", args.packages.len());
    }

    let status =
        helpers::run_with_spinner("Re-resolving and updating", || {
            manager.update_package(&args.packages)
        })?;

    helpers::print_engine_output(&manager);

    if status.success() {
        println!("Update finished");
    } else {
        eprintln!("Engine reported failure (status {status})");
    }

    Ok(status.code())
}

//! Remove command implementation

use inquire::Confirm;

use crate::cli::RemoveArgs;
use crate::error::Result;

use super::helpers::{self, SiteOpts};

/// Confirm removal with the user, showing what would be removed
fn confirm_remove(packages: &[String]) -> Result<bool> {
    println!("\nThe following extension(s) will be removed:");
    for package in packages {
        println!("  - {package}");
    }
    println!();

    Ok(Confirm::new("Proceed with remove?")
        .with_default(true)
        .with_help_message("Press Enter to confirm, or 'n' to cancel")
        .prompt()?)
}

/// Run the remove command
pub fn run(opts: &SiteOpts, args: RemoveArgs) -> Result<i32> {
    if !args.yes && !confirm_remove(&args.packages)? {
        println!("Remove cancelled. No changes were made.");
        return Ok(0);
    }

    let manager = helpers::build_manager(opts)?;

    let status =
        helpers::run_with_spinner("Removing", || manager.remove_package(&args.packages))?;

    helpers::print_engine_output(&manager);

    if status.success() {
        println!("Removed {} extension(s)", args.packages.len());
    } else {
        eprintln!("Engine reported failure (status {status})");
    }

    Ok(status.code())
}

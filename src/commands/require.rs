//! Require command implementation
//!
//! Parses the requirement specs, then hands them to the engine through the
//! manager. The engine resolves constraints, downloads and installs; extman
//! reports its output and passes the status code through as the exit code.

use crate::cli::RequireArgs;
use crate::engine::Requirement;
use crate::error::Result;

use super::helpers::{self, SiteOpts};

/// Run the require command
pub fn run(opts: &SiteOpts, args: RequireArgs) -> Result<i32> {
    let requirements: Vec<Requirement> = args
        .packages
        .iter()
        .map(|spec| Requirement::parse(spec))
        .collect::<Result<_>>()?;

    let manager = helpers::build_manager(opts)?;

    println!("Requiring {} extension(s)", requirements.len());

    let status = helpers::run_with_spinner("Resolving and installing", || {
        manager.require_package(&requirements)
    })?;

    helpers::print_engine_output(&manager);

    if status.success() {
        println!("Required {} extension(s)", requirements.len());
    } else {
        eprintln!("Engine reported failure (status {status})");
    }

    Ok(status.code())
}

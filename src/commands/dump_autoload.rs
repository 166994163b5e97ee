//! Dump-autoload command implementation

use crate::error::Result;

use super::helpers::{self, SiteOpts};

/// Run the dump-autoload command
pub fn run(opts: &SiteOpts) -> Result<i32> {
    let manager = helpers::build_manager(opts)?;

    helpers::run_with_spinner("Regenerating loader metadata", || manager.dump_autoload())?;

    helpers::print_engine_output(&manager);
    println!("Loader metadata regenerated");

    Ok(0)
}

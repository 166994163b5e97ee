//! Search command implementation

use console::Style;

use crate::cli::SearchArgs;
use crate::engine::PackageMatch;
use crate::error::{ExtmanError, Result};

use super::helpers::{self, SiteOpts};

fn display_matches(matches: &[PackageMatch]) {
    for package in matches {
        println!("  {}", Style::new().bold().yellow().apply_to(&package.name));
        if let Some(ref description) = package.description {
            println!("    {description}");
        }
        if let Some(ref url) = package.url {
            println!("    {url}");
        }
    }
}

/// Run the search command
pub fn run(opts: &SiteOpts, args: SearchArgs) -> Result<i32> {
    let manager = helpers::build_manager(opts)?;

    let matches =
        helpers::run_with_spinner("Searching", || manager.search_package(&args.terms))?;

    if args.json {
        let payload = serde_json::to_string_pretty(&matches)
            .map_err(|e| ExtmanError::IoError {
                message: e.to_string(),
            })?;
        println!("{payload}");
        return Ok(0);
    }

    if matches.is_empty() {
        println!("No matches for: {}", args.terms.join(" "));
    } else {
        println!("Found {} package(s):", matches.len());
        display_matches(&matches);
    }

    Ok(0)
}

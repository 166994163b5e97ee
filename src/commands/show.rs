//! Show command implementation

use console::Style;

use crate::cli::ShowArgs;
use crate::engine::PackageDetails;
use crate::error::{ExtmanError, Result};

use super::helpers::{self, SiteOpts};

fn display_details(packages: &[PackageDetails]) {
    for package in packages {
        println!(
            "  {} {}",
            Style::new().bold().yellow().apply_to(&package.name),
            package.version
        );
        if let Some(ref description) = package.description {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Description:"),
                description
            );
        }
        if let Some(ref source) = package.source {
            println!("    {} {}", Style::new().bold().apply_to("Source:"), source);
        }
    }
}

/// Run the show command
pub fn run(opts: &SiteOpts, args: ShowArgs) -> Result<i32> {
    let manager = helpers::build_manager(opts)?;

    let packages = manager.show_package(
        args.target,
        args.name.as_deref(),
        args.constraint.as_deref(),
    )?;

    if args.json {
        let payload = serde_json::to_string_pretty(&packages)
            .map_err(|e| ExtmanError::IoError {
                message: e.to_string(),
            })?;
        println!("{payload}");
        return Ok(0);
    }

    if packages.is_empty() {
        println!("No packages in target '{}'", args.target);
    } else {
        display_details(&packages);
    }

    Ok(0)
}

//! Extman - CMS extension manager
//!
//! Command line front end for the package manager facade: each subcommand
//! maps to one verb on the manager, and mutating verbs pass the engine's
//! status code through as the process exit code.

use clap::Parser;

use extman::cli::{Cli, Commands};
use extman::commands;
use extman::commands::helpers::SiteOpts;

fn main() {
    let cli = Cli::parse();

    let opts = SiteOpts {
        site: cli.site.clone(),
        cache_dir: cli.cache_dir.clone(),
        offline: cli.offline,
    };

    let result = match cli.command {
        Commands::Require(args) => commands::require::run(&opts, args),
        Commands::Remove(args) => commands::remove::run(&opts, args),
        Commands::Update(args) => commands::update::run(&opts, args),
        Commands::Search(args) => commands::search::run(&opts, args),
        Commands::Show(args) => commands::show::run(&opts, args),
        Commands::DumpAutoload => commands::dump_autoload::run(&opts),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

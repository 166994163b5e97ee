//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - require: Require command arguments
//! - remove: Remove command arguments
//! - update: Update command arguments
//! - search: Search command arguments
//! - show: Show command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod remove;
pub mod require;
pub mod search;
pub mod show;
pub mod update;

pub use completions::CompletionsArgs;
pub use remove::RemoveArgs;
pub use require::RequireArgs;
pub use search::SearchArgs;
pub use show::ShowArgs;
pub use update::UpdateArgs;

/// Extman - CMS extension manager
///
/// Drive the site's package engine to install, remove, update and search
/// extensions.
#[derive(Parser, Debug)]
#[command(
    name = "extman",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Extension manager for CMS sites",
    long_about = "Extman manages a site's extensions by driving the external package engine: \
                  dependency resolution, downloads and installation happen in the engine, while \
                  extman marshals configuration and reports the engine's output.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  extman require vendor/blog-tools:^2.1  \x1b[90m# Install with a constraint\x1b[0m\n   \
                  extman remove vendor/blog-tools        \x1b[90m# Remove an extension\x1b[0m\n   \
                  extman update                          \x1b[90m# Update all root packages\x1b[0m\n   \
                  extman search seo                      \x1b[90m# Search the repositories\x1b[0m\n   \
                  extman show --target installed         \x1b[90m# Show installed extensions\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Site directory (defaults to current directory)
    #[arg(long, short = 's', global = true, env = "EXTMAN_SITE")]
    pub site: Option<PathBuf>,

    /// Cache directory (defaults to the platform cache location)
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Construct without the package engine; verbs fail fast
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install or update extensions to satisfy constraints
    Require(RequireArgs),

    /// Remove extensions from the root install
    Remove(RemoveArgs),

    /// Re-resolve and update extensions
    Update(UpdateArgs),

    /// Search the engine's repositories
    Search(SearchArgs),

    /// Show extension information
    Show(ShowArgs),

    /// Regenerate derived loader metadata
    DumpAutoload,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_require() {
        let cli = Cli::try_parse_from(["extman", "require", "vendor/blog-tools:^2.1"]).unwrap();
        match cli.command {
            Commands::Require(args) => {
                assert_eq!(args.packages, vec!["vendor/blog-tools:^2.1"]);
            }
            _ => panic!("Expected Require command"),
        }
    }

    #[test]
    fn test_cli_parsing_require_needs_a_package() {
        assert!(Cli::try_parse_from(["extman", "require"]).is_err());
    }

    #[test]
    fn test_cli_parsing_remove_with_yes() {
        let cli = Cli::try_parse_from(["extman", "remove", "vendor/blog-tools", "-y"]).unwrap();
        match cli.command {
            Commands::Remove(args) => {
                assert_eq!(args.packages, vec!["vendor/blog-tools"]);
                assert!(args.yes);
            }
            _ => panic!("Expected Remove command"),
        }
    }

    #[test]
    fn test_cli_parsing_update_no_packages() {
        let cli = Cli::try_parse_from(["extman", "update"]).unwrap();
        match cli.command {
            Commands::Update(args) => {
                assert!(args.packages.is_empty());
            }
            _ => panic!("Expected Update command"),
        }
    }

    #[test]
    fn test_cli_parsing_dump_autoload() {
        let cli = Cli::try_parse_from(["extman", "dump-autoload"]).unwrap();
        assert!(matches!(cli.command, Commands::DumpAutoload));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["extman", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli =
            Cli::try_parse_from(["extman", "--offline", "-s", "/srv/site", "update"]).unwrap();
        assert!(cli.offline);
        assert_eq!(cli.site, Some(PathBuf::from("/srv/site")));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["extman", "completions", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "zsh");
            }
            _ => panic!("Expected Completions command"),
        }
    }
}

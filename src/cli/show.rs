use clap::Parser;

use crate::engine::ShowTarget;

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Extension name (omit to show the whole target set)
    pub name: Option<String>,

    /// Package set to show: root, installed, all, or platform
    #[arg(long, default_value = "root", value_parser = parse_show_target)]
    pub target: ShowTarget,

    /// Version constraint to match
    #[arg(long)]
    pub constraint: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_show_target(value: &str) -> Result<ShowTarget, String> {
    ShowTarget::parse(value)
        .ok_or_else(|| format!("unknown target '{value}' (expected root, installed, all, or platform)"))
}

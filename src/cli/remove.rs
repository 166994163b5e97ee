use clap::Parser;

/// Arguments for the remove command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Extensions to remove
    #[arg(required = true, value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

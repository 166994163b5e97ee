use clap::Parser;

/// Arguments for the search command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search terms
    #[arg(required = true, value_name = "TERM")]
    pub terms: Vec<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

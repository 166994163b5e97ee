use clap::Parser;

/// Arguments for the update command
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Extensions to update (all root packages if omitted)
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,
}

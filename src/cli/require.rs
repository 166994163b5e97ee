use clap::Parser;

/// Arguments for the require command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install the latest version the engine allows:\n    extman require vendor/blog-tools\n\n\
                   Install with a version constraint:\n    extman require vendor/blog-tools:^2.1\n\n\
                   Install several extensions at once:\n    extman require vendor/blog-tools vendor/seo-kit:~1.4")]
pub struct RequireArgs {
    /// Extensions to require, as name or name:constraint
    #[arg(required = true, value_name = "PACKAGE")]
    pub packages: Vec<String>,
}

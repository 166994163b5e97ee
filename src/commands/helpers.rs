//! Shared helpers for command implementations

use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};

use crate::engine::ProcessEngineFactory;
use crate::error::Result;
use crate::manager::PackageManager;
use crate::manager::environment::Environment;

/// Global site options shared by every command
#[derive(Debug, Clone)]
pub struct SiteOpts {
    pub site: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
    pub offline: bool,
}

/// Resolve the environment and construct the manager with the process engine
pub fn build_manager(opts: &SiteOpts) -> Result<PackageManager> {
    let environment =
        Environment::resolve(opts.site.clone(), opts.cache_dir.clone(), opts.offline)?;
    let factory = ProcessEngineFactory::from_environment(&environment);
    PackageManager::new(&environment, &factory)
}

/// Print everything the engine wrote into the sink, if anything
pub fn print_engine_output(manager: &PackageManager) {
    let output = manager.output();
    if !output.trim().is_empty() {
        print!("{output}");
    }
}

/// Run a blocking engine call behind a spinner
pub fn run_with_spinner<T>(message: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template(&format!("{{spinner}} {message}..."))
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(80));

    let result = f();

    pb.finish_and_clear();
    result
}

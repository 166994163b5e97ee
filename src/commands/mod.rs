//! Command implementations
//!
//! One module per CLI verb. Each `run` builds the manager from the global
//! site options, executes its verb, prints whatever the engine wrote into
//! the output sink, and returns the process exit code — engine status codes
//! pass through to the shell unchanged.

pub mod completions;
pub mod dump_autoload;
pub mod helpers;
pub mod remove;
pub mod require;
pub mod search;
pub mod show;
pub mod update;
pub mod version;

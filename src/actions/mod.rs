//! Operation commands, one per package verb
//!
//! Each command is a single-purpose unit constructed with the shared engine
//! handle, option table, and (for the mutating verbs) the output sink. The
//! manager creates each command lazily on first use and caches it for its
//! own lifetime; commands hold nothing beyond the injected references and
//! are safe to call repeatedly.
//!
//! This family is intentionally a thin adapter layer: resolution,
//! installation and search all happen inside the engine.

mod dump_autoload;
mod remove;
mod require;
mod search;
mod show;
mod update;

pub use dump_autoload::DumpAutoload;
pub use remove::RemovePackage;
pub use require::RequirePackage;
pub use search::SearchPackage;
pub use show::ShowPackage;
pub use update::UpdatePackage;

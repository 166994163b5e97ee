//! Error types and handling for Extman
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! One discipline everywhere: facade operations return `Result<T, ExtmanError>`.
//! Engine status codes are ordinary `Ok` values for mutating verbs (0 success,
//! positive engine-defined) and are never rewritten into errors; the variants
//! below cover faults only — construction failures, the offline precondition,
//! and collaborator failures the engine raises itself.
//!
//! This module is organized into sub-modules by error domain:
//! - [`engine`]: Engine construction, availability, and collaborator errors
//! - [`config`]: Manifest and cache-path errors
//! - [`site`]: Site/extensions-directory errors
//! - [`require`]: Requirement spec parsing errors

pub mod config;
pub mod engine;
pub mod require;
pub mod site;

// Re-export convenience constructors from submodules
#[allow(unused_imports)]
pub use config::{cache_dir_unavailable, manifest_unreadable};
#[allow(unused_imports)]
pub use engine::{construction_failed as engine_construction_failed, failed as engine_failed};
#[allow(unused_imports)]
pub use require::invalid_spec as invalid_requirement;
#[allow(unused_imports)]
pub use site::helper_copy_failed;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Extman operations
#[derive(Error, Diagnostic, Debug)]
pub enum ExtmanError {
    // Engine errors
    #[error("Package engine is not available (offline mode)")]
    #[diagnostic(
        code(extman::engine::unavailable),
        help("The manager was constructed in offline mode. Run again without --offline.")
    )]
    EngineUnavailable,

    #[error("Failed to construct package engine: {reason}")]
    #[diagnostic(
        code(extman::engine::construction_failed),
        help("Check that the engine binary is installed and the extensions manifest is readable")
    )]
    EngineConstructionFailed { reason: String },

    #[error("Package engine failed: {message}")]
    #[diagnostic(code(extman::engine::failed))]
    EngineFailed { message: String },

    // Configuration errors
    #[error("Extensions manifest is unreadable: {path}")]
    #[diagnostic(code(extman::config::manifest_unreadable))]
    ManifestUnreadable { path: String, reason: String },

    #[error("Could not determine a cache directory")]
    #[diagnostic(
        code(extman::config::cache_dir),
        help("Set EXTMAN_CACHE_DIR or pass --cache-dir explicitly")
    )]
    CacheDirUnavailable,

    // Site errors
    #[error("Failed to provision installer helper: {path}")]
    #[diagnostic(
        code(extman::site::helper_copy_failed),
        help("Check that the extensions directory exists and is writable")
    )]
    HelperCopyFailed { path: String, reason: String },

    // Requirement errors
    #[error("Invalid requirement spec: {spec}")]
    #[diagnostic(
        code(extman::require::invalid_spec),
        help("Requirements use the format name or name:constraint, e.g. vendor/blog-tools:^2.1")
    )]
    InvalidRequirement { spec: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(extman::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ExtmanError {
    fn from(err: std::io::Error) -> Self {
        ExtmanError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ExtmanError {
    fn from(err: serde_json::Error) -> Self {
        ExtmanError::EngineFailed {
            message: format!("malformed engine payload: {err}"),
        }
    }
}

impl From<inquire::InquireError> for ExtmanError {
    fn from(err: inquire::InquireError) -> Self {
        ExtmanError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ExtmanError>;

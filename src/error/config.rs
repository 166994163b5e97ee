//! Manifest and cache-path errors

use std::path::Path;

use super::ExtmanError;

/// Creates a manifest unreadable error
pub fn manifest_unreadable(path: impl AsRef<Path>, reason: impl Into<String>) -> ExtmanError {
    ExtmanError::ManifestUnreadable {
        path: path.as_ref().display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a cache directory unavailable error
pub fn cache_dir_unavailable() -> ExtmanError {
    ExtmanError::CacheDirUnavailable
}

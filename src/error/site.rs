//! Site and extensions-directory errors

use std::path::Path;

use super::ExtmanError;

/// Creates a helper copy failure
pub fn helper_copy_failed(path: impl AsRef<Path>, reason: impl Into<String>) -> ExtmanError {
    ExtmanError::HelperCopyFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.into(),
    }
}

//! Requirement spec parsing errors

use super::ExtmanError;

/// Creates an invalid requirement spec error
pub fn invalid_spec(spec: impl Into<String>) -> ExtmanError {
    ExtmanError::InvalidRequirement { spec: spec.into() }
}

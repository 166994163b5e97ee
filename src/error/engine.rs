//! Engine errors

use super::ExtmanError;

/// Creates an engine construction failure
pub fn construction_failed(reason: impl Into<String>) -> ExtmanError {
    ExtmanError::EngineConstructionFailed {
        reason: reason.into(),
    }
}

/// Creates a collaborator failure raised by the engine itself
pub fn failed(message: impl Into<String>) -> ExtmanError {
    ExtmanError::EngineFailed {
        message: message.into(),
    }
}

//! Extension-related errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("Invalid extension name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid extension class name '{name}': {reason}")]
    InvalidClassName { name: String, reason: String },

    #[error("Extension already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Extension not found: {0}")]
    NotFound(String),

    #[error("Method '{method}' not found on extension class {class}")]
    MethodNotFound { class: String, method: String },

    #[error("Rejected by extension: {0}")]
    Rejected(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}

impl ExtensionError {
    /// Shorthand for [`ExtensionError::InvalidName`].
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error comes from extension configuration rather than a hook.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidName { .. } | Self::InvalidClassName { .. } | Self::AlreadyRegistered(_)
        )
    }
}

//! Component registry errors.

use thiserror::Error;

use super::ExtensionError;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Component already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Component not registered: {0}")]
    NotRegistered(String),

    #[error("Extension error: {0}")]
    Extension(#[from] ExtensionError),
}

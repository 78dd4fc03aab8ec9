//! # Tessera Config
//!
//! Loads and validates the Tessera configuration file: which extensions are
//! enabled, their settings, and logging.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};

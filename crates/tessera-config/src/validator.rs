//! Configuration validation.

use std::collections::HashSet;

use tessera_protocols::extension::validate_name;

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error into a [`ConfigError::InvalidValue`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration on its own.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();
        Self::validate_extensions(config, &mut result);
        Self::validate_logging(config, &mut result);
        result
    }

    /// Validate the configuration and check that every enabled extension is
    /// one of `available`.
    pub fn validate_against(config: &Config, available: &[&str]) -> ValidationResult {
        let mut result = Self::validate(config);
        for (i, name) in config.extensions.enabled.iter().enumerate() {
            if validate_name(name).is_ok() && !available.contains(&name.as_str()) {
                result.add_error(ValidationError::new(
                    format!("extensions.enabled[{}]", i),
                    format!("Unknown extension '{}', available: {:?}", name, available),
                ));
            }
        }
        result
    }

    fn validate_extensions(config: &Config, result: &mut ValidationResult) {
        let mut seen = HashSet::new();
        for (i, name) in config.extensions.enabled.iter().enumerate() {
            if let Err(e) = validate_name(name) {
                result.add_error(ValidationError::new(
                    format!("extensions.enabled[{}]", i),
                    e.to_string(),
                ));
            }
            if !seen.insert(name.as_str()) {
                result.add_error(ValidationError::new(
                    format!("extensions.enabled[{}]", i),
                    format!("Extension '{}' is enabled more than once", name),
                ));
            }
        }

        let mut configured: Vec<&String> = config.extensions.settings.keys().collect();
        configured.sort();
        for name in configured {
            if !config.extensions.enabled.contains(name) {
                result.add_warning(ValidationWarning::new(
                    format!("extensions.settings.{}", name),
                    format!("Settings for '{}' are ignored, the extension is not enabled", name),
                ));
            }
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        if config.logging.level.trim().is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "Log level cannot be empty",
            ));
        }

        if let Some(dir) = &config.logging.directory {
            if dir.exists() && !dir.is_dir() {
                result.add_error(ValidationError::new(
                    "logging.directory",
                    format!("{:?} exists and is not a directory", dir),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;

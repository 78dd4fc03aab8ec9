//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extensions: ExtensionsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Extension configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtensionsConfig {
    /// Active extensions, in dispatch order.
    #[serde(default)]
    pub enabled: Vec<String>,

    /// Per-extension settings tables, keyed by extension name.
    #[serde(default)]
    pub settings: HashMap<String, serde_json::Value>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `tessera_core=debug`. `RUST_LOG`
    /// takes precedence when set.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// Write daily-rotated log files here in addition to stderr.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            directory: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.extensions.enabled.is_empty());
        assert!(config.extensions.settings.is_empty());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn test_settings_tables_become_json() {
        let config: Config = toml::from_str(
            r#"
            [extensions]
            enabled = ["defaults"]

            [extensions.settings.defaults]
            kwargs = { theme = "light", size = 2 }
            "#,
        )
        .unwrap();

        assert_eq!(
            config.extensions.settings["defaults"],
            json!({"kwargs": {"theme": "light", "size": 2}})
        );
    }

    #[test]
    fn test_log_format_lowercase() {
        let logging: LoggingConfig = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(logging.format, LogFormat::Json);
        assert_eq!(logging.level, "info");
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let result: Result<LoggingConfig, _> = toml::from_str("format = \"xml\"");
        assert!(result.is_err());
    }
}

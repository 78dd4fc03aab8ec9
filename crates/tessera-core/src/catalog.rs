//! Extension catalog.
//!
//! Turns the configured, ordered list of extension names into extension
//! instances.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use tessera_protocols::Extension;
use tessera_protocols::error::ExtensionError;

use crate::manager::ExtensionManager;

/// Builds an extension from its settings table (`Value::Null` when the
/// configuration has none).
pub type ExtensionFactory =
    Box<dyn Fn(&Value) -> Result<Arc<dyn Extension>, ExtensionError> + Send + Sync>;

struct CatalogEntry {
    description: String,
    factory: ExtensionFactory,
}

/// Name → factory table of the extensions a process can enable.
#[derive(Default)]
pub struct ExtensionCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl ExtensionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a factory under `name`.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        factory: F,
    ) -> Result<(), ExtensionError>
    where
        F: Fn(&Value) -> Result<Arc<dyn Extension>, ExtensionError> + Send + Sync + 'static,
    {
        let name = name.into();
        tessera_protocols::extension::validate_name(&name)?;
        if self.entries.contains_key(&name) {
            return Err(ExtensionError::AlreadyRegistered(name));
        }

        debug!(extension = %name, "Added extension to catalog");
        self.entries.insert(
            name,
            CatalogEntry {
                description: description.into(),
                factory: Box::new(factory),
            },
        );
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Available extensions as `(name, description)`, sorted by name.
    pub fn available(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.description.as_str()))
            .collect()
    }

    /// Build the extensions named in `enabled`, keeping its order.
    pub fn build(
        &self,
        enabled: &[String],
        settings: &HashMap<String, Value>,
    ) -> Result<Vec<Arc<dyn Extension>>, ExtensionError> {
        let mut extensions = Vec::with_capacity(enabled.len());
        for name in enabled {
            let entry = self
                .entries
                .get(name)
                .ok_or_else(|| ExtensionError::NotFound(name.clone()))?;
            let extension = (entry.factory)(settings.get(name).unwrap_or(&Value::Null))?;
            if extension.name() != name {
                return Err(ExtensionError::Custom(format!(
                    "catalog entry '{}' built extension '{}'",
                    name,
                    extension.name()
                )));
            }
            extensions.push(extension);
        }
        Ok(extensions)
    }

    /// Build the extensions named in `enabled` and wrap them in a manager.
    pub fn build_manager(
        &self,
        enabled: &[String],
        settings: &HashMap<String, Value>,
    ) -> Result<ExtensionManager, ExtensionError> {
        let extensions = self.build(enabled, settings)?;
        info!(extensions = ?enabled, "Building extension manager");
        ExtensionManager::new(extensions)
    }
}

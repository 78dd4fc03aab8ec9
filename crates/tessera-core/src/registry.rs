//! Component registry.
//!
//! Maps registered names to component classes and reports every change to the
//! extension manager.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info};

use tessera_protocols::error::{ExtensionError, RegistryError};
use tessera_protocols::{
    ComponentClass, OnComponentRegisteredContext, OnComponentUnregisteredContext,
    OnRegistryCreatedContext, OnRegistryDeletedContext, Registry,
};

use crate::manager::ExtensionManager;

/// Name → component class store.
///
/// Always handled through `Arc<ComponentRegistry>`: hook contexts carry the
/// registry itself.
pub struct ComponentRegistry {
    id: String,
    manager: Arc<ExtensionManager>,
    components: DashMap<String, Arc<ComponentClass>>,
}

impl ComponentRegistry {
    /// Create a registry and announce it with `on_registry_created`.
    ///
    /// Before initialization the manager buffers that event together with a
    /// handle to this registry. If the manager is never initialized, call
    /// [`ExtensionManager::discard_pending`] on teardown to break the cycle.
    pub fn new(
        id: impl Into<String>,
        manager: Arc<ExtensionManager>,
    ) -> Result<Arc<Self>, ExtensionError> {
        let registry = Arc::new(Self {
            id: id.into(),
            manager,
            components: DashMap::new(),
        });

        info!(registry = %registry.id, "Component registry created");
        registry
            .manager
            .on_registry_created(OnRegistryCreatedContext::new(registry.clone()))?;
        Ok(registry)
    }

    pub fn manager(&self) -> &Arc<ExtensionManager> {
        &self.manager
    }

    /// Register `component_cls` under `name`.
    ///
    /// The class stays registered even if an extension rejects the
    /// `on_component_registered` event; the error is returned to the caller.
    pub fn register(
        self: &Arc<Self>,
        name: impl Into<String>,
        component_cls: Arc<ComponentClass>,
    ) -> Result<(), RegistryError> {
        let name = name.into();

        match self.components.entry(name.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                return Err(RegistryError::AlreadyRegistered(name));
            }
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                entry.insert(component_cls.clone());
            }
        }

        debug!(registry = %self.id, component = %name, "Registered component");
        self.manager
            .on_component_registered(OnComponentRegisteredContext::new(
                self.clone(),
                name,
                component_cls,
            ))?;
        Ok(())
    }

    /// Remove the class registered under `name`.
    pub fn unregister(self: &Arc<Self>, name: &str) -> Result<(), RegistryError> {
        let (name, component_cls) = self
            .components
            .remove(name)
            .ok_or_else(|| RegistryError::NotRegistered(name.to_string()))?;

        debug!(registry = %self.id, component = %name, "Unregistered component");
        self.manager
            .on_component_unregistered(OnComponentUnregisteredContext::new(
                self.clone(),
                name,
                component_cls,
            ))?;
        Ok(())
    }

    /// Unregister every component, in name order.
    pub fn clear(self: &Arc<Self>) -> Result<(), RegistryError> {
        for name in self.names() {
            self.unregister(&name)?;
        }
        Ok(())
    }

    /// Unregister everything and announce the registry's deletion.
    pub fn close(self: &Arc<Self>) -> Result<(), RegistryError> {
        self.clear()?;
        info!(registry = %self.id, "Component registry closed");
        self.manager
            .on_registry_deleted(OnRegistryDeletedContext::new(self.clone()))?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl Registry for ComponentRegistry {
    fn id(&self) -> &str {
        &self.id
    }

    fn get(&self, name: &str) -> Option<Arc<ComponentClass>> {
        self.components.get(name).map(|entry| entry.value().clone())
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.components.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

//! Lifecycle events held back until the manager is initialized.

use tessera_protocols::{
    HookName, OnComponentClassCreatedContext, OnComponentClassDeletedContext,
    OnComponentRegisteredContext, OnComponentUnregisteredContext, OnRegistryCreatedContext,
    OnRegistryDeletedContext,
};

/// A class or registry hook call, with its payload.
#[derive(Debug, Clone)]
pub enum BufferedEvent {
    ComponentClassCreated(OnComponentClassCreatedContext),
    ComponentClassDeleted(OnComponentClassDeletedContext),
    RegistryCreated(OnRegistryCreatedContext),
    RegistryDeleted(OnRegistryDeletedContext),
    ComponentRegistered(OnComponentRegisteredContext),
    ComponentUnregistered(OnComponentUnregisteredContext),
}

impl BufferedEvent {
    pub fn hook(&self) -> HookName {
        match self {
            BufferedEvent::ComponentClassCreated(_) => HookName::OnComponentClassCreated,
            BufferedEvent::ComponentClassDeleted(_) => HookName::OnComponentClassDeleted,
            BufferedEvent::RegistryCreated(_) => HookName::OnRegistryCreated,
            BufferedEvent::RegistryDeleted(_) => HookName::OnRegistryDeleted,
            BufferedEvent::ComponentRegistered(_) => HookName::OnComponentRegistered,
            BufferedEvent::ComponentUnregistered(_) => HookName::OnComponentUnregistered,
        }
    }
}
